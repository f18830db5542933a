//! # MySQL Quote Identifiers
//!
//! Validates and escapes MySQL/MariaDB identifiers (database, table, column,
//! alias and similar names) so they can be embedded in generated SQL.
//!
//! This crate provides:
//! - **Escaping**: quote character doubling for quoted identifiers
//! - **Validation**: character sets, reserved words, numeral ambiguity,
//!   trailing spaces and length limits
//! - **Configuration**: per-call options, loadable from the environment
//!
//! ## Architecture
//!
//! Every call runs the same ordered pipeline of stages and either returns the
//! escaped interior of the identifier or exactly one [`IdentifierError`].
//! The caller adds the surrounding quote characters, or uses
//! [`quote_identifier`] to have them added.
//!
//! ```
//! use mysql_quote_identifiers::{escape_identifier, EscapeConfig, IdentifierCategory};
//!
//! let config = EscapeConfig::quoted().with_category(IdentifierCategory::Table);
//! let table = escape_identifier("order`items", &config).unwrap();
//! assert_eq!(format!("CREATE TABLE `{table}` (id int)"), "CREATE TABLE `order``items` (id int)");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod escape;
pub mod options;
pub mod reserved;

pub use config::EscapeConfig;
pub use error::{Error, IdentifierError, IdentifierErrorKind};
pub use escape::{escape_identifier, quote_identifier, quote_qualified, IdentifierEscaper};
pub use options::{DialectMode, EditPolicy, IdentifierCategory, SqlMode, SqlModeSet};
pub use reserved::{is_reserved_word, ReservedWordLookup, ReservedWords};
