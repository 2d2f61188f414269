//! TXT record queries.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ProviderError;

/// Returns `domain` as a fully-qualified name (with a trailing dot).
///
/// Fully-qualified names are never expanded with resolver search domains.
pub fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

/// Joins the character-strings of one TXT record into a single string.
///
/// Fragments are concatenated as bytes before decoding, so a multi-byte
/// character split across fragments survives. Invalid UTF-8 is replaced
/// with U+FFFD.
pub fn txt_to_string(txt: &TXT) -> String {
    let bytes: Vec<u8> = txt.iter().flat_map(|s| s.iter().copied()).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query (made fully-qualified before querying)
/// * `resolver` - The DNS resolver instance
/// * `allow_nxdomain` - Treat a nonexistent domain as one without records
///
/// # Returns
///
/// One string per TXT record, in answer order. Records split into several
/// character-strings are joined without a separator. A domain that exists but
/// has no TXT records yields an empty vector.
///
/// # Errors
///
/// Returns `ProviderError::NxDomain` for a nonexistent domain (unless
/// `allow_nxdomain` is set), `ProviderError::Server` for any other failure
/// response code, `ProviderError::Timeout` on timeout, and
/// `ProviderError::Transport` for everything else.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
    allow_nxdomain: bool,
) -> Result<Vec<String>, ProviderError> {
    let name = fully_qualified(domain);
    log::debug!("Querying TXT records for {name}");

    let result = resolver.lookup(name.as_str(), RecordType::TXT).await;
    match result {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(txt_to_string(txt))
                    } else {
                        None
                    }
                })
                .collect();
            log::debug!("Received {} TXT records for {name}", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => classify_resolve_error(name, e, allow_nxdomain),
    }
}

/// Maps a failed TXT query onto the provider outcome.
pub(crate) fn classify_resolve_error(
    domain: String,
    error: ResolveError,
    allow_nxdomain: bool,
) -> Result<Vec<String>, ProviderError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NoError => {
                log::debug!("{domain} has no TXT records");
                Ok(Vec::new())
            }
            ResponseCode::NXDomain if allow_nxdomain => {
                log::info!("{domain} does not exist, treating it as having no TXT records");
                Ok(Vec::new())
            }
            ResponseCode::NXDomain => {
                log::warn!("{domain} does not exist (NXDOMAIN)");
                Err(ProviderError::NxDomain { domain })
            }
            code => {
                log::warn!("TXT record lookup for {domain} failed: {code}");
                Err(ProviderError::Server { domain, code })
            }
        },
        ResolveErrorKind::Timeout => {
            log::warn!("TXT record lookup timed out for {domain}");
            Err(ProviderError::Timeout { domain })
        }
        _ => {
            log::warn!("Failed to lookup TXT records for {domain}: {error}");
            Err(ProviderError::Transport {
                domain,
                source: error,
            })
        }
    }
}
