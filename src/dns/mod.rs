//! DNS TXT record retrieval.
//!
//! This module provides the record provider the lookup runs against:
//! - [`RecordProvider`]: the seam between the lookup and DNS transport
//! - [`DnsProvider`]: the `hickory-resolver` implementation
//! - TXT queries with NXDOMAIN / NODATA / server-failure classification

mod provider;
mod records;

// Re-export public API
pub use provider::{DnsProvider, RecordProvider};
pub use records::{fully_qualified, lookup_txt_records, txt_to_string};
