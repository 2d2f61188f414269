// Shared test helpers: an in-memory record provider and config builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use dns_kv::{Config, OutputFormat, ProviderError, RecordProvider, ValueType};

/// Record provider that serves a fixed answer and counts queries.
#[allow(dead_code)] // Used by other test files
pub struct FakeProvider {
    records: Vec<String>,
    fail_nxdomain: bool,
    pub queries: AtomicUsize,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn with_records(records: &[&str]) -> Self {
        Self {
            records: records.iter().map(|r| r.to_string()).collect(),
            fail_nxdomain: false,
            queries: AtomicUsize::new(0),
        }
    }

    pub fn nxdomain() -> Self {
        Self {
            records: Vec::new(),
            fail_nxdomain: true,
            queries: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl RecordProvider for FakeProvider {
    async fn txt_records(&self, domain: &str) -> Result<Vec<String>, ProviderError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail_nxdomain {
            return Err(ProviderError::NxDomain {
                domain: domain.to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

/// Records used by most scenarios.
#[allow(dead_code)]
pub const SAMPLE_RECORDS: &[&str] = &["foo=bar", "key=value", "things=item1", "things=item2"];

/// Builds a config for `key` on `example.com`.
#[allow(dead_code)]
pub fn config_for(
    key: &str,
    defaults: &[&str],
    value_type: ValueType,
    output_format: OutputFormat,
) -> Config {
    Config {
        source: "example.com".to_string(),
        key: key.to_string(),
        defaults: defaults.iter().map(|d| d.to_string()).collect(),
        value_type,
        output_format,
        ..Default::default()
    }
}
