//! The identifier escaping pipeline.
//!
//! An identifier runs through a fixed, ordered list of stages over a shared
//! working copy. Each stage either passes (possibly rewriting the working
//! copy) or rejects the identifier, which ends the call.

use super::advisory::{Advisory, AdvisorySink, TracingAdvisorySink};
use super::{charset, quoting};
use crate::config::EscapeConfig;
use crate::constants::{LOG_IDENTIFIER_TRUNCATE_LENGTH, SUPPLEMENTARY_PLANE_START};
use crate::error::{Error, IdentifierError};
use crate::options::{EditPolicy, IdentifierCategory};
use crate::reserved::{ReservedWordLookup, ReservedWords};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Inputs shared by every stage of one call.
struct StageContext<'a> {
    config: &'a EscapeConfig,
    quote_char: char,
    reserved: &'a dyn ReservedWordLookup,
    advisory: &'a dyn AdvisorySink,
}

type StageFn = fn(&mut String, &StageContext<'_>) -> Result<(), IdentifierError>;

struct Stage {
    name: &'static str,
    run: StageFn,
}

/// Stages in execution order. Quote handling must precede the trailing space
/// and length checks, which judge the rewritten identifier.
const STAGES: [Stage; 9] = [
    Stage { name: "charset", run: check_charset },
    Stage { name: "reserved_word", run: check_reserved_word },
    Stage { name: "quote_char", run: handle_quote_char },
    Stage { name: "trailing_space", run: check_trailing_space },
    Stage { name: "all_numeric", run: check_all_numeric },
    Stage { name: "float_like", run: check_float_like },
    Stage { name: "forbidden_code_point", run: check_forbidden_code_points },
    Stage { name: "length", run: check_length },
    Stage { name: "numeral_advisory", run: advise_numeral_ambiguity },
];

fn check_charset(identifier: &mut String, ctx: &StageContext<'_>) -> Result<(), IdentifierError> {
    if charset::is_admissible(identifier, ctx.config.quoted, ctx.quote_char) {
        return Ok(());
    }
    Err(IdentifierError::IllegalCharacter {
        identifier: identifier.clone(),
    })
}

fn check_reserved_word(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    if ctx.config.quoted || !ctx.reserved.contains(identifier, ctx.config.dialect_mode) {
        return Ok(());
    }
    Err(IdentifierError::ReservedWord {
        identifier: identifier.clone(),
    })
}

fn handle_quote_char(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    let quote_char = ctx.quote_char;

    if !ctx.config.quoted {
        if identifier.contains(quote_char) {
            return Err(IdentifierError::IllegalQuoteChar {
                identifier: identifier.clone(),
                quote_char,
            });
        }
        return Ok(());
    }

    match ctx.config.edit_policy {
        EditPolicy::Rewrite => {
            if identifier.contains(quote_char) {
                *identifier = quoting::double_quote_chars(identifier, quote_char);
            }
            Ok(())
        }
        EditPolicy::ValidateOnly => {
            if quoting::quote_runs_are_even(identifier, quote_char) {
                Ok(())
            } else {
                Err(IdentifierError::UnescapedQuoteChar {
                    identifier: identifier.clone(),
                    quote_char,
                })
            }
        }
    }
}

fn check_trailing_space(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    let category = ctx.config.category;
    if category.allows_trailing_space() || !identifier.ends_with(' ') {
        return Ok(());
    }
    Err(IdentifierError::TrailingSpace {
        identifier: identifier.clone(),
        category: category.to_string(),
    })
}

fn check_all_numeric(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    if ctx.config.quoted || !is_numeral(identifier) {
        return Ok(());
    }
    Err(IdentifierError::AllNumeric {
        identifier: identifier.clone(),
    })
}

fn check_float_like(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    if ctx.config.quoted {
        return Ok(());
    }
    let rest = identifier.trim_start_matches(|c: char| c.is_ascii_digit());
    let has_numeral = rest.len() < identifier.len();
    if has_numeral && rest.starts_with(is_exponent_marker) {
        return Err(IdentifierError::FloatLike {
            identifier: identifier.clone(),
        });
    }
    Ok(())
}

fn check_forbidden_code_points(
    identifier: &mut String,
    _ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    let forbidden = identifier
        .chars()
        .find(|&c| c == '\0' || c as u32 >= SUPPLEMENTARY_PLANE_START);
    match forbidden {
        Some(c) => Err(IdentifierError::ForbiddenCodePoint {
            identifier: identifier.clone(),
            code_point: c as u32,
        }),
        None => Ok(()),
    }
}

fn check_length(identifier: &mut String, ctx: &StageContext<'_>) -> Result<(), IdentifierError> {
    let category = ctx.config.category;
    let length = identifier.chars().count();
    let max_length = category.max_length();
    if length <= max_length {
        return Ok(());
    }
    Err(IdentifierError::TooLong {
        identifier: identifier.clone(),
        category: category.to_string(),
        length,
        max_length,
    })
}

fn advise_numeral_ambiguity(
    identifier: &mut String,
    ctx: &StageContext<'_>,
) -> Result<(), IdentifierError> {
    let identifier = identifier.as_str();
    let stem = identifier.strip_suffix(is_exponent_marker).unwrap_or(identifier);
    if is_numeral(stem) {
        ctx.advisory.advise(&Advisory::numeral_ambiguity(identifier));
    }
    Ok(())
}

/// Non-empty and decimal digits only.
fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_exponent_marker(c: char) -> bool {
    c == 'e'
}

fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(LOG_IDENTIFIER_TRUNCATE_LENGTH) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Validates and escapes identifiers.
///
/// Holds the reserved-word lookup and the advisory sink. Cheap to clone and
/// safe to share between threads; every call is independent.
#[derive(Clone)]
pub struct IdentifierEscaper {
    reserved: Arc<dyn ReservedWordLookup>,
    advisory: Arc<dyn AdvisorySink>,
}

impl IdentifierEscaper {
    /// Escaper backed by the built-in reserved-word tables, logging advisories
    /// through `tracing`.
    pub fn new() -> Self {
        Self {
            reserved: Arc::new(ReservedWords::global()),
            advisory: Arc::new(TracingAdvisorySink),
        }
    }

    /// Replace the reserved-word lookup.
    pub fn with_reserved_words(mut self, reserved: Arc<dyn ReservedWordLookup>) -> Self {
        self.reserved = reserved;
        self
    }

    /// Replace the advisory sink.
    pub fn with_advisory_sink(mut self, advisory: Arc<dyn AdvisorySink>) -> Self {
        self.advisory = advisory;
        self
    }

    /// Validate `identifier` and return its escaped interior.
    ///
    /// The surrounding quote characters are not added; see [`Self::quote`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mysql_quote_identifiers::{EscapeConfig, IdentifierEscaper};
    ///
    /// let escaper = IdentifierEscaper::new();
    /// assert_eq!(escaper.escape("foo`bar", &EscapeConfig::quoted()).unwrap(), "foo``bar");
    /// assert!(escaper.escape("foo-bar", &EscapeConfig::new()).is_err());
    /// ```
    pub fn escape(&self, identifier: &str, config: &EscapeConfig) -> Result<String, IdentifierError> {
        let ctx = StageContext {
            config,
            quote_char: config.quote_char(),
            reserved: self.reserved.as_ref(),
            advisory: self.advisory.as_ref(),
        };

        let mut working = identifier.to_string();
        for stage in STAGES.iter() {
            if let Err(e) = (stage.run)(&mut working, &ctx) {
                debug!(
                    stage = stage.name,
                    kind = ?e.kind(),
                    "Rejected identifier {:?}",
                    truncate_for_log(identifier)
                );
                return Err(e);
            }
        }

        Ok(working)
    }

    /// Escape `identifier` as a quoted identifier and wrap it in the active
    /// quote character.
    ///
    /// `config.quoted` is ignored.
    ///
    /// ```
    /// use mysql_quote_identifiers::{EscapeConfig, IdentifierEscaper};
    ///
    /// let escaper = IdentifierEscaper::new();
    /// assert_eq!(escaper.quote("foo-bar", &EscapeConfig::new()).unwrap(), "`foo-bar`");
    /// assert_eq!(
    ///     escaper.quote("foo\"bar", &EscapeConfig::new().with_ansi_quotes()).unwrap(),
    ///     "\"foo\"\"bar\""
    /// );
    /// ```
    pub fn quote(&self, identifier: &str, config: &EscapeConfig) -> Result<String, IdentifierError> {
        let config = config.clone().with_quoted(true);
        let quote_char = config.quote_char();
        let escaped = self.escape(identifier, &config)?;
        Ok(format!("{quote_char}{escaped}{quote_char}"))
    }

    /// Quote a dot-qualified name of one to three parts.
    ///
    /// Leading parts are treated as database and table names; the last part
    /// uses `config.category`.
    ///
    /// ```
    /// use mysql_quote_identifiers::{EscapeConfig, IdentifierEscaper};
    ///
    /// let escaper = IdentifierEscaper::new();
    /// assert_eq!(
    ///     escaper.quote_qualified(&["shop", "order items", "id"], &EscapeConfig::new()).unwrap(),
    ///     "`shop`.`order items`.`id`"
    /// );
    /// ```
    pub fn quote_qualified(&self, parts: &[&str], config: &EscapeConfig) -> Result<String, Error> {
        let leading: &[IdentifierCategory] = match parts.len() {
            1 => &[],
            2 => &[IdentifierCategory::Database],
            3 => &[IdentifierCategory::Database, IdentifierCategory::Table],
            n => {
                return Err(Error::invalid_input(format!(
                    "Qualified name must have 1 to 3 parts, got {}",
                    n
                )))
            }
        };

        let categories = leading.iter().copied().chain(std::iter::once(config.category));
        let quoted = parts
            .iter()
            .zip(categories)
            .map(|(part, category)| self.quote(part, &config.clone().with_category(category)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quoted.join("."))
    }
}

impl Default for IdentifierEscaper {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IdentifierEscaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierEscaper").finish_non_exhaustive()
    }
}
