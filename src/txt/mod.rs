//! TXT record key/value resolution.
//!
//! This module implements the `key=value` convention for TXT records:
//! - Record parsing (split on the first `=`)
//! - Key lookup with default substitution and cardinality enforcement
//!
//! Everything here is pure: no I/O, no logging of individual records.

mod lookup;
mod parse;

// Re-export public API
pub use lookup::lookup_values;
pub use parse::parse_record;

#[cfg(test)]
mod tests;
