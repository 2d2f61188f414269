//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option resolves as explicit flag, then environment
//! variable, then built-in default.

use std::fmt;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::error_handling::AppError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format, colored when stderr is a terminal (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Cardinality contract for one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// Exactly one value must resolve
    Single,
    /// Any number of values, including none
    List,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Single => "single",
            ValueType::List => "list",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How resolved values are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line, unquoted
    Plain,
    /// A JSON string (single) or array of strings (list)
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Opt`].
///
/// # Examples
///
/// ```
/// use dns_kv::{Config, ValueType};
///
/// let config = Config {
///     source: "example.com".to_string(),
///     key: "things".to_string(),
///     value_type: ValueType::List,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain name or `dns://` URI to query
    pub source: String,

    /// Key to look up
    pub key: String,

    /// Values used when the key is absent
    pub defaults: Vec<String>,

    /// Cardinality contract
    pub value_type: ValueType,

    /// Output format
    pub output_format: OutputFormat,

    /// Treat NXDOMAIN as "no records" instead of an error
    pub allow_nxdomain: bool,

    /// Per-attempt DNS timeout in seconds
    pub timeout_seconds: u64,

    /// DNS attempts per nameserver
    pub attempts: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: String::new(),
            key: String::new(),
            defaults: Vec::new(),
            value_type: ValueType::Single,
            output_format: OutputFormat::Plain,
            allow_nxdomain: false,
            timeout_seconds: DNS_TIMEOUT_SECS,
            attempts: DNS_ATTEMPTS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the caller-side contract before any query is made.
    ///
    /// In `single` mode at most one default may be supplied. The lookup itself
    /// enforces cardinality again; this check only fails fast with a clearer
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::CallerContract` if more than one default is given in
    /// `single` mode.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.value_type == ValueType::Single && self.defaults.len() > 1 {
            return Err(AppError::CallerContract {
                count: self.defaults.len(),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Single value, plain output
/// dns_kv example.com key
///
/// # All values of a repeated key as a JSON array
/// dns_kv --type list --format json example.com things
///
/// # Query a specific nameserver, falling back to a default
/// dns_kv dns://1.1.1.1/example.com theanswer 42
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_kv",
    version,
    about = "Looks up a key in a domain's DNS TXT records (\"key=value\" convention)."
)]
pub struct Opt {
    /// Domain name, or DNS URI naming a nameserver (dns://1.1.1.1/example.com)
    pub source: String,

    /// Key name to look up in the domain
    pub key: String,

    /// Default value(s) to use if the key is not found
    #[arg(value_name = "DEFAULT")]
    pub defaults: Vec<String>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        env = "DNS_KV_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Plain
    )]
    pub output_format: OutputFormat,

    /// Data value type
    #[arg(
        short = 't',
        long = "type",
        env = "DNS_KV_TYPE",
        value_enum,
        default_value_t = ValueType::Single
    )]
    pub value_type: ValueType,

    /// Treat a nonexistent domain (NXDOMAIN) as a domain without records
    #[arg(long, env = "DNS_KV_ALLOW_NXDOMAIN")]
    pub allow_nxdomain: bool,

    /// Per-attempt DNS timeout in seconds
    #[arg(long, env = "DNS_KV_TIMEOUT_SECONDS", default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// DNS attempts per nameserver
    #[arg(long, env = "DNS_KV_ATTEMPTS", default_value_t = DNS_ATTEMPTS)]
    pub attempts: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "DNS_KV_LOG_LEVEL", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "DNS_KV_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            source: opt.source,
            key: opt.key,
            defaults: opt.defaults,
            value_type: opt.value_type,
            output_format: opt.output_format,
            allow_nxdomain: opt.allow_nxdomain,
            timeout_seconds: opt.timeout_seconds,
            attempts: opt.attempts,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.value_type, ValueType::Single);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.timeout_seconds, DNS_TIMEOUT_SECS);
        assert_eq!(config.attempts, DNS_ATTEMPTS);
        assert!(!config.allow_nxdomain);
        assert!(config.defaults.is_empty());
    }

    #[test]
    fn test_validate_single_mode_allows_one_default() {
        let config = Config {
            defaults: vec!["42".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_single_mode_rejects_two_defaults() {
        let config = Config {
            defaults: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        };
        match config.validate() {
            Err(AppError::CallerContract { count }) => assert_eq!(count, 2),
            other => panic!("expected CallerContract error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_list_mode_allows_many_defaults() {
        let config = Config {
            defaults: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            value_type: ValueType::List,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_value_type_and_format_display() {
        assert_eq!(ValueType::Single.to_string(), "single");
        assert_eq!(ValueType::List.to_string(), "list");
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
