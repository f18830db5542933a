//! Centralized constants for identifier validation.
//!
//! Length limits, quote characters and environment variable names live here
//! so the escaping pipeline itself carries no magic values.

// =============================================================================
// Length Limits
// =============================================================================

/// Maximum length (in characters) of most identifiers: databases, tables,
/// columns, indexes, views, stored programs and the like.
pub const DEFAULT_IDENTIFIER_MAX_LENGTH: usize = 64;

/// Maximum length of an alias.
pub const ALIAS_MAX_LENGTH: usize = 256;

/// Maximum length of a compound statement label.
pub const COMPOUND_STATEMENT_LABEL_MAX_LENGTH: usize = 16;

// =============================================================================
// Quote Characters
// =============================================================================

/// Default identifier quote character.
pub const BACKTICK: char = '`';

/// Identifier quote character when `ANSI_QUOTES` is enabled.
pub const DOUBLE_QUOTE: char = '"';

// =============================================================================
// Character Ranges
// =============================================================================

/// First code point outside the Basic Multilingual Plane.
pub const SUPPLEMENTARY_PLANE_START: u32 = 0x1_0000;

// =============================================================================
// Environment Variables
// =============================================================================

/// Whether identifiers are quoted (`true`/`false`, `1`/`0`).
pub const ENV_QUOTED: &str = "MYSQL_QI_QUOTED";

/// Identifier category (`database`, `table`, `column`, ...).
pub const ENV_CATEGORY: &str = "MYSQL_QI_CATEGORY";

/// Dialect mode (`standard`, `oracle`).
pub const ENV_DIALECT: &str = "MYSQL_QI_DIALECT";

/// Server `sql_mode` value, comma separated.
pub const ENV_SQL_MODE: &str = "MYSQL_QI_SQL_MODE";

/// Edit policy (`rewrite`, `validate-only`).
pub const ENV_EDIT_POLICY: &str = "MYSQL_QI_EDIT_POLICY";

// =============================================================================
// Logging Constants
// =============================================================================

/// Default filter when neither `RUST_LOG` nor `--debug` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn,mysql_quote_identifiers=info";

/// Truncation length for identifiers echoed in log lines.
pub const LOG_IDENTIFIER_TRUNCATE_LENGTH: usize = 80;
