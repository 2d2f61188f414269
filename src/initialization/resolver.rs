//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::InitializationError;
use crate::source::Source;

/// Initializes the DNS resolver for a source.
///
/// A plain domain is resolved through the system nameservers
/// (`/etc/resolv.conf` on Unix). If the system configuration cannot be read,
/// the resolver falls back to its default public nameservers. A source that
/// names a nameserver is resolved through that nameserver only, over UDP with
/// TCP fallback for truncated answers.
///
/// # Arguments
///
/// * `source` - The parsed source identifier
/// * `timeout_seconds` - Per-attempt query timeout
/// * `attempts` - Attempts per nameserver
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the timeout or attempt
/// count is zero.
pub fn init_resolver(
    source: &Source,
    timeout_seconds: u64,
    attempts: usize,
) -> Result<TokioAsyncResolver, InitializationError> {
    if timeout_seconds == 0 {
        return Err(InitializationError::DnsResolverError(
            "timeout must be at least 1 second".to_string(),
        ));
    }
    if attempts == 0 {
        return Err(InitializationError::DnsResolverError(
            "attempts must be at least 1".to_string(),
        ));
    }

    let config = match source.nameserver() {
        Some(nameserver) => {
            log::debug!("Using nameserver {nameserver}");
            let group = NameServerConfigGroup::from_ips_clear(
                &[nameserver.ip()],
                nameserver.port(),
                true,
            );
            ResolverConfig::from_parts(None, Vec::new(), group)
        }
        None => system_config(),
    };

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_seconds);
    opts.attempts = attempts;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    Ok(TokioAsyncResolver::tokio(config, opts))
}

fn system_config() -> ResolverConfig {
    match hickory_resolver::system_conf::read_system_conf() {
        Ok((config, _)) if !config.name_servers().is_empty() => {
            log::debug!(
                "Using {} nameserver(s) from system configuration",
                config.name_servers().len()
            );
            config
        }
        Ok(_) => {
            log::warn!("System DNS configuration lists no nameservers, using defaults");
            ResolverConfig::default()
        }
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}), using defaults");
            ResolverConfig::default()
        }
    }
}
