//! dns_kv library: key/value lookups in DNS TXT records
//!
//! TXT records following the `key=value` convention are resolved for a domain,
//! the values of one key are collected (with optional defaults), checked
//! against a cardinality contract (`single` or `list`), and rendered as plain
//! lines or JSON.
//!
//! # Example
//!
//! ```no_run
//! use dns_kv::{run, Config, OutputFormat, ValueType};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     source: "example.com".to_string(),
//!     key: "things".to_string(),
//!     value_type: ValueType::List,
//!     output_format: OutputFormat::Json,
//!     ..Default::default()
//! };
//!
//! let mut stdout = std::io::stdout().lock();
//! run(&config, &mut stdout).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! DNS queries need a Tokio runtime. The lookup and rendering steps
//! ([`txt::lookup_values`], [`output::render`]) are synchronous and pure.

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod output;
pub mod source;
pub mod txt;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, ValueType};
pub use dns::{DnsProvider, RecordProvider};
pub use error_handling::{AppError, LookupError, OutputError, ProviderError, SourceError};
pub use run::{run, run_lookup};
pub use source::Source;

// Internal run module (provider -> lookup -> render)
mod run {
    use std::io::Write;

    use log::{debug, info};

    use crate::config::Config;
    use crate::dns::{DnsProvider, RecordProvider};
    use crate::error_handling::{AppError, ProviderError};
    use crate::initialization::init_resolver;
    use crate::output::render;
    use crate::source::Source;
    use crate::txt::lookup_values;

    /// Runs one lookup against DNS with the provided configuration.
    ///
    /// Validates the caller contract, parses the source identifier, builds a
    /// resolver for it and then hands over to [`run_lookup`].
    ///
    /// # Errors
    ///
    /// - `AppError::CallerContract` if more than one default is given in `single` mode
    /// - `AppError::InvalidSource` if the source identifier cannot be parsed
    /// - `AppError::Provider` if the resolver cannot be built or the query fails
    /// - `AppError::Lookup` / `AppError::Output` as for [`run_lookup`]
    pub async fn run<W: Write + ?Sized>(config: &Config, sink: &mut W) -> Result<(), AppError> {
        config.validate()?;

        let source = Source::parse(&config.source).map_err(|e| AppError::InvalidSource {
            source_id: config.source.clone(),
            source: e,
        })?;

        let resolver = init_resolver(&source, config.timeout_seconds, config.attempts).map_err(
            |e| AppError::Provider {
                source_id: source.to_string(),
                source: ProviderError::from(e),
            },
        )?;
        let provider = DnsProvider::new(resolver, config.allow_nxdomain);

        run_lookup(config, &source, &provider, sink).await
    }

    /// Fetches the records for `source` from `provider`, looks up the
    /// configured key and renders the result to `sink`.
    ///
    /// Nothing is written to `sink` unless every step succeeds.
    ///
    /// # Errors
    ///
    /// - `AppError::Provider` if the provider fails
    /// - `AppError::Lookup` if the key resolves to an unacceptable number of values
    /// - `AppError::Output` if rendering or writing fails
    pub async fn run_lookup<P, W>(
        config: &Config,
        source: &Source,
        provider: &P,
        sink: &mut W,
    ) -> Result<(), AppError>
    where
        P: RecordProvider + ?Sized,
        W: Write + ?Sized,
    {
        info!(
            "Looking up key {:?} in {source} ({} value, {} output)",
            config.key, config.value_type, config.output_format
        );

        let records = provider
            .txt_records(source.domain())
            .await
            .map_err(|e| AppError::Provider {
                source_id: source.to_string(),
                source: e,
            })?;
        debug!("{} TXT records for {}", records.len(), source.domain());

        let values = lookup_values(&records, &config.key, &config.defaults, config.value_type)
            .map_err(|e| AppError::Lookup {
                key: config.key.clone(),
                source_id: source.to_string(),
                source: e,
            })?;

        render(&values, config.output_format, config.value_type, sink)?;
        Ok(())
    }
}
