//! Command line entry point.
//!
//! Escapes identifiers given as arguments, or one per line on stdin, and
//! prints one result per line to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use mysql_quote_identifiers::constants::{DEFAULT_LOG_FILTER, ENV_QUOTED};
use mysql_quote_identifiers::{
    DialectMode, EditPolicy, EscapeConfig, IdentifierCategory, IdentifierEscaper, SqlModeSet,
};
use serde::Serialize;
use std::io::BufRead;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mysql-quote-identifiers")]
#[command(about = "Validate and escape MySQL identifiers like table or database names")]
#[command(version)]
struct Args {
    /// Identifiers to escape (read from stdin, one per line, if omitted)
    identifiers: Vec<String>,

    /// Set the logging level to debug
    #[arg(long)]
    debug: bool,

    /// Validate as unquoted identifiers
    #[arg(long, conflicts_with = "wrap")]
    unquoted: bool,

    /// Identifier category (database, table, column, alias, ...)
    #[arg(short, long)]
    category: Option<IdentifierCategory>,

    /// Dialect mode (standard, oracle)
    #[arg(long)]
    dialect: Option<DialectMode>,

    /// Use `"` as the quote character
    #[arg(long)]
    ansi_quotes: bool,

    /// Server sql_mode value, e.g. "ANSI_QUOTES,STRICT_TRANS_TABLES"
    #[arg(long)]
    sql_mode: Option<String>,

    /// Only validate quote characters instead of doubling them
    #[arg(long)]
    validate_only: bool,

    /// Print the result wrapped in quote characters
    #[arg(short, long)]
    wrap: bool,

    /// Print one JSON object per identifier
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Outcome<'a> {
    identifier: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    escaped: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<mysql_quote_identifiers::IdentifierErrorKind>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = build_config(&args)?;
    debug!(?config, "Escape configuration");

    let identifiers = if args.identifiers.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read identifiers from stdin")?
    } else {
        args.identifiers.clone()
    };

    let escaper = IdentifierEscaper::new();
    let mut rejected = 0usize;

    for identifier in &identifiers {
        let result = if args.wrap {
            escaper.quote(identifier, &config)
        } else {
            escaper.escape(identifier, &config)
        };

        if result.is_err() {
            rejected += 1;
        }

        if args.json {
            let outcome = match &result {
                Ok(escaped) => Outcome {
                    identifier,
                    escaped: Some(escaped.clone()),
                    error: None,
                    kind: None,
                },
                Err(e) => Outcome {
                    identifier,
                    escaped: None,
                    error: Some(e.to_string()),
                    kind: Some(e.kind()),
                },
            };
            println!("{}", serde_json::to_string(&outcome)?);
            continue;
        }

        match result {
            Ok(escaped) => println!("{escaped}"),
            Err(e) => match e.suggestion() {
                Some(hint) => eprintln!("{identifier:?}: {e} ({hint})"),
                None => eprintln!("{identifier:?}: {e}"),
            },
        }
    }

    if rejected > 0 {
        anyhow::bail!("{} of {} identifiers rejected", rejected, identifiers.len());
    }

    Ok(())
}

/// Merge command line flags over the environment configuration.
fn build_config(args: &Args) -> Result<EscapeConfig> {
    let mut config = EscapeConfig::from_env().context("Invalid environment configuration")?;

    // Unlike the library, the command line quotes unless told otherwise.
    if args.unquoted {
        config.quoted = false;
    } else if std::env::var(ENV_QUOTED).is_err() {
        config.quoted = true;
    }

    if let Some(category) = args.category {
        config.category = category;
    }
    if let Some(dialect) = args.dialect {
        config.dialect_mode = dialect;
    }
    if let Some(sql_mode) = &args.sql_mode {
        config.sql_mode = SqlModeSet::from_server_value(sql_mode);
    }
    if args.ansi_quotes {
        config = config.with_ansi_quotes();
    }
    if args.validate_only {
        config.edit_policy = EditPolicy::ValidateOnly;
    }

    Ok(config)
}

/// Initialize tracing subscriber with stderr output.
///
/// Logs MUST go to stderr because stdout carries the escaped identifiers.
fn init_logging(debug: bool) {
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| {
            if debug {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new(DEFAULT_LOG_FILTER)
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use mysql_quote_identifiers::constants::{ENV_CATEGORY, ENV_DIALECT, ENV_EDIT_POLICY, ENV_SQL_MODE};
    use serial_test::serial;

    const ALL_VARS: [&str; 5] = [ENV_QUOTED, ENV_CATEGORY, ENV_DIALECT, ENV_SQL_MODE, ENV_EDIT_POLICY];

    fn clear_env() {
        for var in ALL_VARS {
            std::env::remove_var(var);
        }
    }

    fn config_for(flags: &[&str]) -> EscapeConfig {
        let argv = std::iter::once("mysql-quote-identifiers").chain(flags.iter().copied());
        build_config(&Args::parse_from(argv)).unwrap()
    }

    #[test]
    #[serial]
    fn test_quotes_by_default() {
        clear_env();
        assert!(config_for(&[]).quoted);
        assert!(!config_for(&["--unquoted"]).quoted);
    }

    #[test]
    #[serial]
    fn test_env_quoted_is_respected() {
        clear_env();
        std::env::set_var(ENV_QUOTED, "false");
        let config = config_for(&[]);
        clear_env();
        assert!(!config.quoted);
    }

    #[test]
    #[serial]
    fn test_ansi_quotes_survives_sql_mode() {
        clear_env();
        let config = config_for(&["--sql-mode", "STRICT_TRANS_TABLES", "--ansi-quotes"]);
        assert_eq!(config.quote_char(), '"');

        assert_eq!(config_for(&["--sql-mode", "ANSI"]).quote_char(), '"');
        assert_eq!(config_for(&["--sql-mode", "STRICT_TRANS_TABLES"]).quote_char(), '`');
    }

    #[test]
    #[serial]
    fn test_sql_mode_flag_replaces_env() {
        clear_env();
        std::env::set_var(ENV_SQL_MODE, "ANSI_QUOTES");
        let config = config_for(&["--sql-mode", "STRICT_TRANS_TABLES"]);
        clear_env();
        assert_eq!(config.quote_char(), '`');
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        clear_env();
        std::env::set_var(ENV_CATEGORY, "database");
        std::env::set_var(ENV_DIALECT, "standard");
        let from_env = config_for(&[]);
        let config = config_for(&["--category", "table", "--dialect", "oracle", "--validate-only"]);
        clear_env();

        assert_eq!(from_env.category, IdentifierCategory::Database);
        assert_eq!(config.category, IdentifierCategory::Table);
        assert_eq!(config.dialect_mode, DialectMode::OracleCompatible);
        assert_eq!(config.edit_policy, EditPolicy::ValidateOnly);
    }

    #[test]
    fn test_unquoted_conflicts_with_wrap() {
        let parsed = Args::try_parse_from(["mysql-quote-identifiers", "--unquoted", "--wrap", "foo"]);
        assert!(parsed.is_err());
    }
}
