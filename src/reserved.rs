//! Reserved-word tables.
//!
//! Unquoted identifiers may not be reserved words. The tables are built once,
//! on first use, and are read-only afterwards.

use crate::options::DialectMode;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Lookup of reserved words per dialect.
pub trait ReservedWordLookup: Send + Sync {
    /// Check whether `word` is reserved, comparing case-insensitively.
    fn contains(&self, word: &str, dialect_mode: DialectMode) -> bool;
}

impl<T: ReservedWordLookup + ?Sized> ReservedWordLookup for &T {
    fn contains(&self, word: &str, dialect_mode: DialectMode) -> bool {
        (**self).contains(word, dialect_mode)
    }
}

/// Words reserved in every dialect mode.
const STANDARD_RESERVED_WORDS: &[&str] = &[
    "ACCESSIBLE", "ADD", "ALL", "ALTER", "ANALYZE", "AND", "AS", "ASC", "ASENSITIVE",
    "BEFORE", "BETWEEN", "BIGINT", "BINARY", "BLOB", "BOTH", "BY",
    "CALL", "CASCADE", "CASE", "CHANGE", "CHAR", "CHARACTER", "CHECK", "COLLATE", "COLUMN",
    "CONDITION", "CONSTRAINT", "CONTINUE", "CONVERT", "CREATE", "CROSS", "CUME_DIST",
    "CURRENT_DATE", "CURRENT_ROLE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURSOR",
    "DATABASE", "DATABASES", "DAY_HOUR", "DAY_MICROSECOND", "DAY_MINUTE", "DAY_SECOND",
    "DEC", "DECIMAL", "DECLARE", "DEFAULT", "DELAYED", "DELETE", "DELETE_DOMAIN_ID",
    "DENSE_RANK", "DESC", "DESCRIBE", "DETERMINISTIC", "DISTINCT", "DISTINCTROW", "DIV",
    "DO_DOMAIN_IDS", "DOUBLE", "DROP", "DUAL",
    "EACH", "ELSE", "ELSEIF", "EMPTY", "ENCLOSED", "ESCAPED", "EXCEPT", "EXISTS", "EXIT",
    "EXPLAIN",
    "FALSE", "FETCH", "FIRST_VALUE", "FLOAT", "FLOAT4", "FLOAT8", "FOR", "FORCE", "FOREIGN",
    "FROM", "FULLTEXT", "FUNCTION",
    "GENERAL", "GENERATED", "GET", "GRANT", "GROUP", "GROUPING", "GROUPS",
    "HAVING", "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE", "HOUR_SECOND",
    "IF", "IGNORE", "IGNORE_DOMAIN_IDS", "IGNORE_SERVER_IDS", "IN", "INDEX", "INFILE",
    "INNER", "INOUT", "INSENSITIVE", "INSERT", "INT", "INT1", "INT2", "INT3", "INT4", "INT8",
    "INTEGER", "INTERSECT", "INTERVAL", "INTO", "IO_AFTER_GTIDS", "IO_BEFORE_GTIDS", "IS",
    "ITERATE",
    "JOIN", "JSON_TABLE",
    "KEY", "KEYS", "KILL",
    "LAG", "LAST_VALUE", "LATERAL", "LEAD", "LEADING", "LEAVE", "LEFT", "LIKE", "LIMIT",
    "LINEAR", "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK", "LONG", "LONGBLOB",
    "LONGTEXT", "LOOP", "LOW_PRIORITY",
    "MASTER_BIND", "MASTER_HEARTBEAT_PERIOD", "MASTER_SSL_VERIFY_SERVER_CERT", "MATCH",
    "MAXVALUE", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT", "MIDDLEINT", "MINUTE_MICROSECOND",
    "MINUTE_SECOND", "MOD", "MODIFIES",
    "NATURAL", "NOT", "NO_WRITE_TO_BINLOG", "NTH_VALUE", "NTILE", "NULL", "NUMERIC",
    "OF", "OFFSET", "ON", "OPTIMIZE", "OPTIMIZER_COSTS", "OPTION", "OPTIONALLY", "OR",
    "ORDER", "OUT", "OUTER", "OUTFILE", "OVER",
    "PAGE_CHECKSUM", "PARSE_VCOL_EXPR", "PARTITION", "PERCENT_RANK", "POSITION", "PRECISION",
    "PRIMARY", "PROCEDURE", "PURGE",
    "RANGE", "RANK", "READ", "READS", "READ_WRITE", "REAL", "RECURSIVE", "REF_SYSTEM_ID",
    "REFERENCES", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE", "RESIGNAL",
    "RESTRICT", "RETURN", "RETURNING", "REVOKE", "RIGHT", "RLIKE", "ROW", "ROW_NUMBER",
    "ROWS",
    "SCHEMA", "SCHEMAS", "SECOND_MICROSECOND", "SELECT", "SENSITIVE", "SEPARATOR", "SET",
    "SHOW", "SIGNAL", "SLOW", "SMALLINT", "SPATIAL", "SPECIFIC", "SQL", "SQLEXCEPTION",
    "SQLSTATE", "SQLWARNING", "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT",
    "SSL", "STARTING", "STATS_AUTO_RECALC", "STATS_PERSISTENT", "STATS_SAMPLE_PAGES",
    "STORED", "STRAIGHT_JOIN", "SYSTEM",
    "TABLE", "TERMINATED", "THEN", "TINYBLOB", "TINYINT", "TINYTEXT", "TO", "TRAILING",
    "TRIGGER", "TRUE",
    "UNDO", "UNION", "UNIQUE", "UNLOCK", "UNSIGNED", "UPDATE", "USAGE", "USE", "USING",
    "UTC_DATE", "UTC_TIME", "UTC_TIMESTAMP",
    "VALUES", "VARBINARY", "VARCHAR", "VARCHARACTER", "VARYING", "VIRTUAL",
    "WHEN", "WHERE", "WHILE", "WINDOW", "WITH", "WRITE",
    "XOR",
    "YEAR_MONTH",
    "ZEROFILL",
];

/// Words additionally reserved under `sql_mode=ORACLE`.
const ORACLE_RESERVED_WORDS: &[&str] = &[
    "BODY", "ELSIF", "GOTO", "HISTORY", "MINUS", "OTHERS", "PACKAGE", "PERIOD", "RAISE",
    "ROWNUM", "ROWTYPE", "SYSDATE", "SYSTEM_TIME", "VERSIONING", "WITHOUT",
];

/// Reserved-word tables for both dialect modes.
#[derive(Debug, Clone)]
pub struct ReservedWords {
    standard: HashSet<&'static str>,
    oracle: HashSet<&'static str>,
}

impl ReservedWords {
    /// Build the tables from the built-in keyword lists.
    pub fn new() -> Self {
        let standard: HashSet<&'static str> = STANDARD_RESERVED_WORDS.iter().copied().collect();
        let oracle = standard
            .iter()
            .copied()
            .chain(ORACLE_RESERVED_WORDS.iter().copied())
            .collect();
        Self { standard, oracle }
    }

    /// The shared, lazily built tables.
    pub fn global() -> &'static ReservedWords {
        &RESERVED_WORDS
    }

    /// All words reserved in a dialect mode, upper-cased.
    pub fn words(&self, dialect_mode: DialectMode) -> &HashSet<&'static str> {
        match dialect_mode {
            DialectMode::Standard => &self.standard,
            DialectMode::OracleCompatible => &self.oracle,
        }
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservedWordLookup for ReservedWords {
    fn contains(&self, word: &str, dialect_mode: DialectMode) -> bool {
        // Unicode case mapping, so look-alikes such as U+017F `ſelect` match too.
        self.words(dialect_mode).contains(word.to_uppercase().as_str())
    }
}

static RESERVED_WORDS: Lazy<ReservedWords> = Lazy::new(ReservedWords::new);

/// Check a word against the built-in reserved-word tables.
pub fn is_reserved_word(word: &str, dialect_mode: DialectMode) -> bool {
    RESERVED_WORDS.contains(word, dialect_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_case_insensitive() {
        assert!(is_reserved_word("select", DialectMode::Standard));
        assert!(is_reserved_word("SELECT", DialectMode::Standard));
        assert!(is_reserved_word("SeLeCt", DialectMode::Standard));
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_reserved_word("\u{17F}elect", DialectMode::Standard));
        assert!(!is_reserved_word("sélect", DialectMode::Standard));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!is_reserved_word("selected", DialectMode::Standard));
        assert!(!is_reserved_word("my_table", DialectMode::Standard));
        assert!(!is_reserved_word("", DialectMode::Standard));
    }

    #[test]
    fn test_oracle_words() {
        assert!(!is_reserved_word("package", DialectMode::Standard));
        assert!(is_reserved_word("package", DialectMode::OracleCompatible));
        assert!(is_reserved_word("rownum", DialectMode::OracleCompatible));
        // Standard words stay reserved in Oracle mode.
        assert!(is_reserved_word("table", DialectMode::OracleCompatible));
    }

    #[test]
    fn test_tables_are_upper_case() {
        let words = ReservedWords::global();
        for dialect in [DialectMode::Standard, DialectMode::OracleCompatible] {
            for word in words.words(dialect) {
                assert_eq!(*word, word.to_uppercase());
            }
        }
    }

    #[test]
    fn test_oracle_table_is_superset() {
        let words = ReservedWords::new();
        let standard = words.words(DialectMode::Standard);
        let oracle = words.words(DialectMode::OracleCompatible);
        assert!(standard.is_subset(oracle));
        assert_eq!(oracle.len(), standard.len() + ORACLE_RESERVED_WORDS.len());
    }
}
