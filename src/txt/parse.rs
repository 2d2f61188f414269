//! TXT record parsing.

/// Splits a raw TXT record into a `(key, value)` pair.
///
/// The record is split on the first `=` only. The key is everything before it
/// and the value is everything after it, untouched: it may be empty and may
/// contain further `=` characters. No trimming or case-folding is applied.
///
/// # Returns
///
/// `None` if the record contains no `=` (such records are not key/value data).
///
/// # Examples
///
/// ```
/// use dns_kv::txt::parse_record;
///
/// assert_eq!(parse_record("key=value"), Some(("key", "value")));
/// assert_eq!(parse_record("url=a=b"), Some(("url", "a=b")));
/// assert_eq!(parse_record("v=spf1 -all"), Some(("v", "spf1 -all")));
/// assert_eq!(parse_record("no separator"), None);
/// ```
pub fn parse_record(record: &str) -> Option<(&str, &str)> {
    record.split_once('=')
}
