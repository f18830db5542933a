//! Escaping configuration.
//!
//! An [`EscapeConfig`] bundles every per-call toggle of the escaping pipeline.
//! It can be built in code or loaded from environment variables.

use crate::constants::{ENV_CATEGORY, ENV_DIALECT, ENV_EDIT_POLICY, ENV_QUOTED, ENV_SQL_MODE};
use crate::error::Error;
use crate::options::{DialectMode, EditPolicy, IdentifierCategory, SqlMode, SqlModeSet};
use serde::{Deserialize, Serialize};

/// Configuration for escaping a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EscapeConfig {
    /// Whether the caller wraps the result in quote characters
    pub quoted: bool,

    /// Kind of object the identifier names
    pub category: IdentifierCategory,

    /// Dialect selecting the reserved-word table
    pub dialect_mode: DialectMode,

    /// Active SQL mode flags
    pub sql_mode: SqlModeSet,

    /// Handling of quote characters in quoted identifiers
    pub edit_policy: EditPolicy,
}

impl EscapeConfig {
    /// Default configuration: unquoted column name, standard dialect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a quoted identifier.
    pub fn quoted() -> Self {
        Self::default().with_quoted(true)
    }

    /// Set whether the result will be wrapped in quote characters.
    pub fn with_quoted(mut self, quoted: bool) -> Self {
        self.quoted = quoted;
        self
    }

    /// Set the category that selects the length limit and trailing-space rule.
    pub fn with_category(mut self, category: IdentifierCategory) -> Self {
        self.category = category;
        self
    }

    /// Set the dialect whose reserved-word table applies.
    pub fn with_dialect_mode(mut self, dialect_mode: DialectMode) -> Self {
        self.dialect_mode = dialect_mode;
        self
    }

    /// Replace the active SQL mode flags.
    pub fn with_sql_mode(mut self, sql_mode: SqlModeSet) -> Self {
        self.sql_mode = sql_mode;
        self
    }

    /// Enable `ANSI_QUOTES`, switching the quote character to `"`.
    pub fn with_ansi_quotes(mut self) -> Self {
        self.sql_mode = self.sql_mode.with(SqlMode::AnsiQuotes);
        self
    }

    /// Set how quote characters in quoted identifiers are handled.
    pub fn with_edit_policy(mut self, edit_policy: EditPolicy) -> Self {
        self.edit_policy = edit_policy;
        self
    }

    /// The quote character implied by the SQL mode.
    pub fn quote_char(&self) -> char {
        self.sql_mode.quote_char()
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// All optional:
    /// - `MYSQL_QI_QUOTED`: `true`/`1` for quoted identifiers (default: false)
    /// - `MYSQL_QI_CATEGORY`: identifier category (default: column)
    /// - `MYSQL_QI_DIALECT`: `standard` or `oracle` (default: standard)
    /// - `MYSQL_QI_SQL_MODE`: server `sql_mode` value (default: empty)
    /// - `MYSQL_QI_EDIT_POLICY`: `rewrite` or `validate-only` (default: rewrite)
    pub fn from_env() -> Result<Self, Error> {
        let quoted = match std::env::var(ENV_QUOTED) {
            Ok(v) => parse_bool(&v)
                .ok_or_else(|| Error::config(format!("{ENV_QUOTED} must be a boolean, got {v:?}")))?,
            Err(_) => false,
        };

        let category = env_parsed::<IdentifierCategory>(ENV_CATEGORY)?.unwrap_or_default();
        let dialect_mode = env_parsed::<DialectMode>(ENV_DIALECT)?.unwrap_or_default();
        let edit_policy = env_parsed::<EditPolicy>(ENV_EDIT_POLICY)?.unwrap_or_default();

        let sql_mode = std::env::var(ENV_SQL_MODE)
            .map(|v| SqlModeSet::from_server_value(&v))
            .unwrap_or_default();

        Ok(EscapeConfig {
            quoted,
            category,
            dialect_mode,
            sql_mode,
            edit_policy,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_parsed<T>(name: &str) -> Result<Option<T>, Error>
where
    T: std::str::FromStr<Err = Error>,
{
    match std::env::var(name) {
        Ok(v) => v
            .parse()
            .map(Some)
            .map_err(|e| Error::config(format!("{name}: {e}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [ENV_QUOTED, ENV_CATEGORY, ENV_DIALECT, ENV_SQL_MODE, ENV_EDIT_POLICY];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = EscapeConfig::default();
        assert!(!config.quoted);
        assert_eq!(config.category, IdentifierCategory::Column);
        assert_eq!(config.dialect_mode, DialectMode::Standard);
        assert!(config.sql_mode.is_empty());
        assert_eq!(config.edit_policy, EditPolicy::Rewrite);
        assert_eq!(config.quote_char(), '`');
    }

    #[test]
    fn test_builder() {
        let config = EscapeConfig::quoted()
            .with_category(IdentifierCategory::Table)
            .with_ansi_quotes()
            .with_edit_policy(EditPolicy::ValidateOnly);
        assert!(config.quoted);
        assert_eq!(config.category, IdentifierCategory::Table);
        assert_eq!(config.quote_char(), '"');
        assert_eq!(config.edit_policy, EditPolicy::ValidateOnly);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(EscapeConfig::from_env().unwrap(), EscapeConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        clear_env();
        std::env::set_var(ENV_QUOTED, "1");
        std::env::set_var(ENV_CATEGORY, "database");
        std::env::set_var(ENV_DIALECT, "oracle");
        std::env::set_var(ENV_SQL_MODE, "ANSI,STRICT_ALL_TABLES");
        std::env::set_var(ENV_EDIT_POLICY, "validate-only");

        let config = EscapeConfig::from_env().unwrap();
        clear_env();

        assert!(config.quoted);
        assert_eq!(config.category, IdentifierCategory::Database);
        assert_eq!(config.dialect_mode, DialectMode::OracleCompatible);
        assert_eq!(config.quote_char(), '"');
        assert_eq!(config.edit_policy, EditPolicy::ValidateOnly);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_malformed() {
        clear_env();
        std::env::set_var(ENV_QUOTED, "perhaps");
        assert!(matches!(EscapeConfig::from_env(), Err(Error::Config(_))));

        clear_env();
        std::env::set_var(ENV_CATEGORY, "galaxy");
        assert!(matches!(EscapeConfig::from_env(), Err(Error::Config(_))));
        clear_env();
    }

    #[test]
    fn test_serde_round_trip_shape() {
        let config = EscapeConfig::quoted().with_ansi_quotes();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["category"], "column");
        assert_eq!(json["sql_mode"][0], "ANSI_QUOTES");
        assert_eq!(json["edit_policy"], "rewrite");
    }
}
