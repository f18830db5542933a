//! Error types for identifier validation.
//!
//! Every rejection produced by the escaping pipeline maps to exactly one
//! [`IdentifierError`] variant. The crate-level [`Error`] wraps those together
//! with configuration and input errors raised outside the pipeline.

use serde::Serialize;
use thiserror::Error;

/// Classified rejection of a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// Code point outside the allowed set for the quoting mode, or empty input.
    #[error("identifier {identifier:?} uses illegal characters")]
    IllegalCharacter { identifier: String },

    /// Unquoted identifier is a reserved word of the dialect.
    #[error("identifier {identifier:?} is a reserved word and must be quoted")]
    ReservedWord { identifier: String },

    /// Unquoted identifier contains the active quote character.
    #[error("unquoted identifier {identifier:?} contains the quote character {quote_char}")]
    IllegalQuoteChar { identifier: String, quote_char: char },

    /// Validate-only mode found an odd-length run of quote characters.
    #[error("identifier {identifier:?} contains an unescaped quote character {quote_char}")]
    UnescapedQuoteChar { identifier: String, quote_char: char },

    /// Identifier ends with a space in a category that forbids it.
    #[error("{category} names can't end with space characters")]
    TrailingSpace { identifier: String, category: String },

    /// Unquoted identifier consists solely of digits.
    #[error("unquoted identifier {identifier:?} can't consist solely of digits")]
    AllNumeric { identifier: String },

    /// Unquoted identifier reads as a floating-point literal (`1e...`).
    #[error("unquoted identifier {identifier:?} begins with a numeral followed by 'e'")]
    FloatLike { identifier: String },

    /// Identifier contains NUL or a supplementary-plane code point.
    #[error("identifier contains forbidden code point U+{code_point:04X}")]
    ForbiddenCodePoint { identifier: String, code_point: u32 },

    /// Identifier exceeds the length limit of its category.
    #[error("identifier is {length} characters long, {category} names are limited to {max_length}")]
    TooLong {
        identifier: String,
        category: String,
        length: usize,
        max_length: usize,
    },
}

/// Fieldless discriminant of [`IdentifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierErrorKind {
    IllegalCharacter,
    ReservedWord,
    IllegalQuoteChar,
    UnescapedQuoteChar,
    TrailingSpace,
    AllNumeric,
    FloatLike,
    ForbiddenCodePoint,
    TooLong,
}

impl IdentifierError {
    /// The kind of rejection, without its context.
    pub fn kind(&self) -> IdentifierErrorKind {
        match self {
            Self::IllegalCharacter { .. } => IdentifierErrorKind::IllegalCharacter,
            Self::ReservedWord { .. } => IdentifierErrorKind::ReservedWord,
            Self::IllegalQuoteChar { .. } => IdentifierErrorKind::IllegalQuoteChar,
            Self::UnescapedQuoteChar { .. } => IdentifierErrorKind::UnescapedQuoteChar,
            Self::TrailingSpace { .. } => IdentifierErrorKind::TrailingSpace,
            Self::AllNumeric { .. } => IdentifierErrorKind::AllNumeric,
            Self::FloatLike { .. } => IdentifierErrorKind::FloatLike,
            Self::ForbiddenCodePoint { .. } => IdentifierErrorKind::ForbiddenCodePoint,
            Self::TooLong { .. } => IdentifierErrorKind::TooLong,
        }
    }

    /// The identifier that was rejected, as it stood when the failing stage ran.
    pub fn identifier(&self) -> &str {
        match self {
            Self::IllegalCharacter { identifier }
            | Self::ReservedWord { identifier }
            | Self::IllegalQuoteChar { identifier, .. }
            | Self::UnescapedQuoteChar { identifier, .. }
            | Self::TrailingSpace { identifier, .. }
            | Self::AllNumeric { identifier }
            | Self::FloatLike { identifier }
            | Self::ForbiddenCodePoint { identifier, .. }
            | Self::TooLong { identifier, .. } => identifier,
        }
    }

    /// Get a user-friendly suggestion for how to fix this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::IllegalCharacter { .. } => {
                Some("Quote the identifier, or restrict it to [0-9a-zA-Z$_] and U+0080-U+FFFF")
            }
            Self::ReservedWord { .. } | Self::AllNumeric { .. } | Self::FloatLike { .. } => {
                Some("Quote the identifier")
            }
            Self::IllegalQuoteChar { .. } => {
                Some("Quote the identifier so the quote character can be escaped")
            }
            Self::UnescapedQuoteChar { .. } => {
                Some("Double every quote character, or use the rewrite edit policy")
            }
            Self::TrailingSpace { .. } => Some("Remove the trailing space"),
            Self::ForbiddenCodePoint { .. } => None,
            Self::TooLong { .. } => Some("Shorten the identifier"),
        }
    }
}

/// Crate-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier was rejected by the escaping pipeline.
    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A textual option could not be parsed.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The identifier rejection, if this is one.
    pub fn as_identifier_error(&self) -> Option<&IdentifierError> {
        match self {
            Self::Identifier(e) => Some(e),
            _ => None,
        }
    }
}
