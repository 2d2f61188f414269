//! Record provider abstraction.

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ProviderError;

use super::records::lookup_txt_records;

/// Supplies the raw TXT record strings for a domain.
///
/// Implementations own transport concerns (nameserver selection, timeouts,
/// retries). An existing domain without TXT records must yield an empty vector,
/// not an error.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    async fn txt_records(&self, domain: &str) -> Result<Vec<String>, ProviderError>;
}

/// Record provider backed by `hickory-resolver`.
pub struct DnsProvider {
    resolver: TokioAsyncResolver,
    allow_nxdomain: bool,
}

impl DnsProvider {
    pub fn new(resolver: TokioAsyncResolver, allow_nxdomain: bool) -> Self {
        Self {
            resolver,
            allow_nxdomain,
        }
    }
}

#[async_trait]
impl RecordProvider for DnsProvider {
    async fn txt_records(&self, domain: &str) -> Result<Vec<String>, ProviderError> {
        lookup_txt_records(domain, &self.resolver, self.allow_nxdomain).await
    }
}
