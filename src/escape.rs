//! Identifier validation and escaping.
//!
//! Uses MySQL/MariaDB identifier rules: backtick quoting (or `"` under
//! `ANSI_QUOTES`), reserved words, numeral ambiguity and length limits.

mod advisory;
mod charset;
mod pipeline;
mod quoting;

pub use advisory::{
    Advisory, AdvisoryKind, AdvisorySink, CollectingAdvisorySink, NoopAdvisorySink,
    TracingAdvisorySink,
};
pub use pipeline::IdentifierEscaper;

use crate::config::EscapeConfig;
use crate::error::{Error, IdentifierError};
use once_cell::sync::Lazy;

static DEFAULT_ESCAPER: Lazy<IdentifierEscaper> = Lazy::new(IdentifierEscaper::new);

/// Validate an identifier and escape its interior with the default escaper.
///
/// # Examples
///
/// ```
/// use mysql_quote_identifiers::escape_identifier;
/// use mysql_quote_identifiers::EscapeConfig;
///
/// assert_eq!(escape_identifier("foo_bar", &EscapeConfig::new()).unwrap(), "foo_bar");
/// assert_eq!(escape_identifier("foo`bar", &EscapeConfig::quoted()).unwrap(), "foo``bar");
/// assert!(escape_identifier("foo-bar", &EscapeConfig::new()).is_err());
/// ```
pub fn escape_identifier(identifier: &str, config: &EscapeConfig) -> Result<String, IdentifierError> {
    DEFAULT_ESCAPER.escape(identifier, config)
}

/// Escape an identifier and wrap it in the active quote character.
pub fn quote_identifier(identifier: &str, config: &EscapeConfig) -> Result<String, IdentifierError> {
    DEFAULT_ESCAPER.quote(identifier, config)
}

/// Quote a one- to three-part dot-qualified name.
pub fn quote_qualified(parts: &[&str], config: &EscapeConfig) -> Result<String, Error> {
    DEFAULT_ESCAPER.quote_qualified(parts, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::IdentifierCategory;

    #[test]
    fn test_free_functions() {
        assert_eq!(escape_identifier("users", &EscapeConfig::new()).unwrap(), "users");
        assert_eq!(quote_identifier("users", &EscapeConfig::new()).unwrap(), "`users`");
        assert_eq!(
            quote_qualified(
                &["app", "users"],
                &EscapeConfig::new().with_category(IdentifierCategory::Table)
            )
            .unwrap(),
            "`app`.`users`"
        );
    }
}
