//! Configuration constants.
//!
//! This module defines the operational defaults and the exit statuses the
//! binary reports for each error kind.

// Network operation defaults
/// DNS query timeout in seconds (per attempt)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts per nameserver before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// Port used when a DNS URI names a nameserver without one
pub const DNS_DEFAULT_PORT: u16 = 53;

/// Longest domain name, in bytes, without the trailing dot
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Longest single label of a domain name, in bytes
pub const MAX_LABEL_LENGTH: usize = 63;

/// URI scheme for sources that name a nameserver (RFC 4501)
pub const DNS_URI_SCHEME: &str = "dns";

// Exit statuses
// 2 is shared with clap's own usage errors: both mean "the invocation was malformed".
pub const EXIT_SUCCESS: i32 = 0;
/// More than one default supplied in `single` mode
pub const EXIT_CALLER_CONTRACT: i32 = 1;
/// Source identifier could not be parsed
pub const EXIT_INVALID_SOURCE: i32 = 2;
/// DNS resolution failed
pub const EXIT_PROVIDER: i32 = 3;
/// Key resolved to zero or too many values
pub const EXIT_LOOKUP: i32 = 4;
/// Rendering or writing the values failed
pub const EXIT_OUTPUT: i32 = 5;
