//! Closed enumerations that make up an escaping configuration.

use crate::constants::{
    ALIAS_MAX_LENGTH, BACKTICK, COMPOUND_STATEMENT_LABEL_MAX_LENGTH,
    DEFAULT_IDENTIFIER_MAX_LENGTH, DOUBLE_QUOTE,
};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Lowercase and map `-`/space to `_` so `Validate-Only` and `validate_only` agree.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Kind of schema object an identifier names.
///
/// The category selects the length limit and whether trailing spaces are
/// tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierCategory {
    Database,
    Table,
    #[default]
    Column,
    Index,
    Constraint,
    StoredProgram,
    View,
    Tablespace,
    Server,
    LogFileGroup,
    Alias,
    CompoundStatement,
    UserVariable,
    ResourceGroup,
}

impl IdentifierCategory {
    /// Every category, in declaration order.
    pub const ALL: [IdentifierCategory; 14] = [
        Self::Database,
        Self::Table,
        Self::Column,
        Self::Index,
        Self::Constraint,
        Self::StoredProgram,
        Self::View,
        Self::Tablespace,
        Self::Server,
        Self::LogFileGroup,
        Self::Alias,
        Self::CompoundStatement,
        Self::UserVariable,
        Self::ResourceGroup,
    ];

    /// Maximum identifier length in characters.
    pub fn max_length(&self) -> usize {
        match self {
            Self::Alias => ALIAS_MAX_LENGTH,
            Self::CompoundStatement => COMPOUND_STATEMENT_LABEL_MAX_LENGTH,
            _ => DEFAULT_IDENTIFIER_MAX_LENGTH,
        }
    }

    /// Whether a name of this category may end with a space character.
    pub fn allows_trailing_space(&self) -> bool {
        matches!(self, Self::Server | Self::Alias | Self::CompoundStatement)
    }

    /// Snake-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Table => "table",
            Self::Column => "column",
            Self::Index => "index",
            Self::Constraint => "constraint",
            Self::StoredProgram => "stored_program",
            Self::View => "view",
            Self::Tablespace => "tablespace",
            Self::Server => "server",
            Self::LogFileGroup => "log_file_group",
            Self::Alias => "alias",
            Self::CompoundStatement => "compound_statement",
            Self::UserVariable => "user_variable",
            Self::ResourceGroup => "resource_group",
        }
    }
}

impl fmt::Display for IdentifierCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| Error::invalid_value("category", s))
    }
}

/// Server dialect, selecting the reserved-word table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialectMode {
    #[default]
    Standard,
    /// `sql_mode=ORACLE`, which reserves additional PL/SQL keywords.
    OracleCompatible,
}

impl fmt::Display for DialectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::OracleCompatible => write!(f, "oracle_compatible"),
        }
    }
}

impl FromStr for DialectMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "standard" | "default" => Ok(Self::Standard),
            "oracle" | "oracle_compatible" => Ok(Self::OracleCompatible),
            _ => Err(Error::invalid_value("dialect", s)),
        }
    }
}

/// SQL mode flags that change identifier quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SqlMode {
    /// Treat `"` as an identifier quote character instead of a string quote.
    AnsiQuotes,
}

impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnsiQuotes => write!(f, "ANSI_QUOTES"),
        }
    }
}

impl FromStr for SqlMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ansi_quotes" => Ok(Self::AnsiQuotes),
            _ => Err(Error::invalid_value("sql_mode", s)),
        }
    }
}

/// Set of active [`SqlMode`] flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqlModeSet(BTreeSet<SqlMode>);

impl SqlModeSet {
    /// Empty set: backtick quoting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag.
    pub fn with(mut self, mode: SqlMode) -> Self {
        self.0.insert(mode);
        self
    }

    /// Check whether a flag is set.
    pub fn contains(&self, mode: SqlMode) -> bool {
        self.0.contains(&mode)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SqlMode> + '_ {
        self.0.iter().copied()
    }

    /// The identifier quote character under these modes.
    pub fn quote_char(&self) -> char {
        if self.contains(SqlMode::AnsiQuotes) {
            DOUBLE_QUOTE
        } else {
            BACKTICK
        }
    }

    /// Parse a server `@@sql_mode` value such as `"ANSI_QUOTES,STRICT_TRANS_TABLES"`.
    ///
    /// The `ANSI` combination mode implies `ANSI_QUOTES`. Flags that don't
    /// affect identifier quoting are ignored.
    pub fn from_server_value(value: &str) -> Self {
        let mut set = Self::new();
        for flag in value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match normalize(flag).as_str() {
                "ansi_quotes" | "ansi" => set.0.insert(SqlMode::AnsiQuotes),
                _ => {
                    debug!("Ignoring sql_mode flag without quoting impact: {}", flag);
                    false
                }
            };
        }
        set
    }
}

impl FromIterator<SqlMode> for SqlModeSet {
    fn from_iter<I: IntoIterator<Item = SqlMode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SqlModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let modes: Vec<String> = self.iter().map(|m| m.to_string()).collect();
        f.write_str(&modes.join(","))
    }
}

/// What to do with quote characters inside a quoted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Double every quote character.
    #[default]
    Rewrite,
    /// Leave the identifier untouched and reject odd runs of quote characters.
    ValidateOnly,
}

impl fmt::Display for EditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rewrite => write!(f, "rewrite"),
            Self::ValidateOnly => write!(f, "validate_only"),
        }
    }
}

impl FromStr for EditPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "rewrite" | "edit" => Ok(Self::Rewrite),
            "validate_only" | "validate" | "only_validate" => Ok(Self::ValidateOnly),
            _ => Err(Error::invalid_value("edit_policy", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_limits() {
        assert_eq!(IdentifierCategory::Database.max_length(), 64);
        assert_eq!(IdentifierCategory::Column.max_length(), 64);
        assert_eq!(IdentifierCategory::Alias.max_length(), 256);
        assert_eq!(IdentifierCategory::CompoundStatement.max_length(), 16);
    }

    #[test]
    fn test_category_trailing_space() {
        let allowed: Vec<_> = IdentifierCategory::ALL
            .iter()
            .filter(|c| c.allows_trailing_space())
            .collect();
        assert_eq!(
            allowed,
            vec![
                &IdentifierCategory::Server,
                &IdentifierCategory::Alias,
                &IdentifierCategory::CompoundStatement
            ]
        );
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("TABLE".parse::<IdentifierCategory>().unwrap(), IdentifierCategory::Table);
        assert_eq!(
            "compound-statement".parse::<IdentifierCategory>().unwrap(),
            IdentifierCategory::CompoundStatement
        );
        for category in IdentifierCategory::ALL {
            assert_eq!(category.to_string().parse::<IdentifierCategory>().unwrap(), category);
        }
        assert!("schema_thing".parse::<IdentifierCategory>().is_err());
    }

    #[test]
    fn test_dialect_and_policy_parse() {
        assert_eq!("oracle".parse::<DialectMode>().unwrap(), DialectMode::OracleCompatible);
        assert_eq!("Standard".parse::<DialectMode>().unwrap(), DialectMode::Standard);
        assert_eq!("validate-only".parse::<EditPolicy>().unwrap(), EditPolicy::ValidateOnly);
        assert_eq!("rewrite".parse::<EditPolicy>().unwrap(), EditPolicy::Rewrite);
        assert!("sometimes".parse::<EditPolicy>().is_err());
    }

    #[test]
    fn test_quote_char() {
        assert_eq!(SqlModeSet::new().quote_char(), '`');
        assert_eq!(SqlModeSet::new().with(SqlMode::AnsiQuotes).quote_char(), '"');
    }

    #[test]
    fn test_sql_mode_from_server_value() {
        let set = SqlModeSet::from_server_value("STRICT_TRANS_TABLES,ANSI_QUOTES,NO_ZERO_DATE");
        assert!(set.contains(SqlMode::AnsiQuotes));

        let set = SqlModeSet::from_server_value("ansi");
        assert!(set.contains(SqlMode::AnsiQuotes));

        let set = SqlModeSet::from_server_value("STRICT_TRANS_TABLES,ONLY_FULL_GROUP_BY");
        assert!(set.is_empty());
        assert!(SqlModeSet::from_server_value("").is_empty());
    }

    #[test]
    fn test_sql_mode_set_display() {
        let set: SqlModeSet = [SqlMode::AnsiQuotes].into_iter().collect();
        assert_eq!(set.to_string(), "ANSI_QUOTES");
        assert_eq!(SqlModeSet::new().to_string(), "");
    }
}
