//! Character-set admissibility.
//!
//! Each quoting mode admits a fixed code-point set, matched against the whole
//! identifier at once. NUL, supplementary-plane code points and the active
//! quote character are passed through here; the forbidden code point and
//! quote character stages own those.

use crate::constants::{BACKTICK, DOUBLE_QUOTE};
use once_cell::sync::Lazy;
use regex::Regex;

/// Code points admitted in an unquoted identifier.
const UNQUOTED_CLASS: &str = r"0-9a-zA-Z$_\x{0080}-\x{FFFF}";

/// Code points admitted in a quoted identifier.
const QUOTED_CLASS: &str = r"\x{0001}-\x{FFFF}";

/// NUL and the supplementary planes.
const FORBIDDEN_CLASS: &str = r"\x{0000}\x{10000}-\x{10FFFF}";

/// Compiled character-set patterns.
///
/// These patterns are compiled once at first use (lazy static).
/// All patterns are built from hardcoded classes that are covered by tests.
static UNQUOTED_BACKTICK: Lazy<Regex> = Lazy::new(|| compile(UNQUOTED_CLASS, Some(BACKTICK)));
static UNQUOTED_DOUBLE_QUOTE: Lazy<Regex> =
    Lazy::new(|| compile(UNQUOTED_CLASS, Some(DOUBLE_QUOTE)));
static QUOTED: Lazy<Regex> = Lazy::new(|| compile(QUOTED_CLASS, None));

fn compile(class: &str, quote_char: Option<char>) -> Regex {
    let quote = quote_char.map(String::from).unwrap_or_default();
    let pattern = format!("^[{class}{FORBIDDEN_CLASS}{quote}]+$");
    Regex::new(&pattern)
        .unwrap_or_else(|e| panic!("Internal error: invalid regex pattern '{}': {}", pattern, e))
}

/// Check that `identifier` is non-empty and uses only admissible code points.
pub(crate) fn is_admissible(identifier: &str, quoted: bool, quote_char: char) -> bool {
    let pattern: &Regex = if quoted {
        &QUOTED
    } else if quote_char == DOUBLE_QUOTE {
        &UNQUOTED_DOUBLE_QUOTE
    } else {
        &UNQUOTED_BACKTICK
    };
    pattern.is_match(identifier)
}
