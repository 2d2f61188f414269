//! Error type definitions.
//!
//! This module defines every error that can end an invocation, plus the
//! top-level [`AppError`] that carries the invocation context (key, source)
//! and maps each kind to a process exit status.

use hickory_resolver::error::ResolveError;
use hickory_resolver::proto::op::ResponseCode;
use log::SetLoggerError;
use thiserror::Error;

use crate::config::{
    EXIT_CALLER_CONTRACT, EXIT_INVALID_SOURCE, EXIT_LOOKUP, EXIT_OUTPUT, EXIT_PROVIDER,
};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failures reported by a record provider.
///
/// Every variant names the domain that was queried.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The domain does not exist (NXDOMAIN).
    #[error("no TXT records for domain {domain} (NXDOMAIN)")]
    NxDomain { domain: String },

    /// The remote server answered with a failure response code.
    #[error("error from remote DNS server for {domain}: {code}")]
    Server { domain: String, code: ResponseCode },

    /// No answer arrived before the configured timeout.
    #[error("DNS query for {domain} timed out")]
    Timeout { domain: String },

    /// Any other resolver or transport failure.
    #[error("error executing DNS query for {domain}")]
    Transport {
        domain: String,
        #[source]
        source: ResolveError,
    },

    /// The provider could not be constructed.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Cardinality failures from the key/value lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no values found for key {key}, and no default provided")]
    NoValue { key: String },

    #[error("{count} values found for key {key}, but only 1 was expected")]
    TooManyValues { key: String, count: usize },
}

/// Failures while rendering or writing values.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Single-value output was asked to render a different number of values.
    #[error("expected {expected} value but got {actual} ({values:?})")]
    Cardinality {
        expected: usize,
        actual: usize,
        values: Vec<String>,
    },

    #[error("error writing JSON")]
    Encode(#[from] serde_json::Error),

    #[error("error writing output")]
    Io(#[from] std::io::Error),
}

/// Invalid source identifiers (domain names or `dns:` URIs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("source identifier is empty")]
    Empty,

    #[error("invalid DNS URI {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("unsupported URI scheme {scheme:?} (only \"dns\" is supported)")]
    UnsupportedScheme { scheme: String },

    #[error("DNS URI {uri} does not name a domain")]
    MissingDomain { uri: String },

    #[error("{domain:?} is not a valid domain name: {reason}")]
    InvalidDomain { domain: String, reason: String },

    #[error("nameserver {host:?} must be an IP address")]
    NameserverNotIp { host: String },

    #[error("DNS URI {uri} asks for {query:?}, but only TXT records in class IN are supported")]
    UnsupportedQuery { uri: String, query: String },
}

/// Top-level error for one invocation.
///
/// Each variant corresponds to one exit status (see [`AppError::exit_code`]).
#[derive(Error, Debug)]
pub enum AppError {
    /// More than one default was supplied while the value type is `single`.
    #[error(
        "got {count} default values, but the value type is \"single\" (did you mean to set --type list?)"
    )]
    CallerContract { count: usize },

    #[error("invalid source {source_id:?}")]
    InvalidSource {
        source_id: String,
        #[source]
        source: SourceError,
    },

    #[error("error doing DNS lookup for {source_id}")]
    Provider {
        source_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("error looking up values for key \"{key}\" in {source_id}")]
    Lookup {
        key: String,
        source_id: String,
        #[source]
        source: LookupError,
    },

    #[error("error writing output values")]
    Output(#[from] OutputError),
}

impl AppError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::CallerContract { .. } => EXIT_CALLER_CONTRACT,
            AppError::InvalidSource { .. } => EXIT_INVALID_SOURCE,
            AppError::Provider { .. } => EXIT_PROVIDER,
            AppError::Lookup { .. } => EXIT_LOOKUP,
            AppError::Output(_) => EXIT_OUTPUT,
        }
    }
}
