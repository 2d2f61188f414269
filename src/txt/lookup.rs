//! Key lookup over a domain's TXT records.

use crate::config::ValueType;
use crate::error_handling::LookupError;

use super::parse::parse_record;

/// Collects the values for `key` across `records` and enforces the
/// cardinality contract.
///
/// Values are collected in record order, duplicates included. Keys match
/// byte-for-byte. When nothing matches, `defaults` replaces the (empty) result
/// wholesale; when anything matches, `defaults` is ignored.
///
/// # Arguments
///
/// * `records` - Raw TXT record strings, in the order the provider returned them
/// * `key` - Key to look up
/// * `defaults` - Fallback values, used only when no record matches
/// * `value_type` - `Single` requires exactly one value; `List` accepts any number
///
/// # Errors
///
/// In `Single` mode, returns `LookupError::NoValue` when no value (and no
/// default) resolves, and `LookupError::TooManyValues` when more than one does.
/// `List` mode never fails.
pub fn lookup_values<S: AsRef<str>>(
    records: &[S],
    key: &str,
    defaults: &[String],
    value_type: ValueType,
) -> Result<Vec<String>, LookupError> {
    let mut values: Vec<String> = records
        .iter()
        .filter_map(|record| parse_record(record.as_ref()))
        .filter(|(record_key, _)| *record_key == key)
        .map(|(_, value)| value.to_string())
        .collect();

    log::debug!(
        "{} of {} TXT records matched key {key:?}",
        values.len(),
        records.len()
    );

    if values.is_empty() {
        if !defaults.is_empty() {
            log::debug!("Key {key:?} not found, using {} default(s)", defaults.len());
        }
        values = defaults.to_vec();
    }

    if value_type == ValueType::Single {
        match values.len() {
            0 => {
                return Err(LookupError::NoValue {
                    key: key.to_string(),
                })
            }
            1 => {}
            count => {
                return Err(LookupError::TooManyValues {
                    key: key.to_string(),
                    count,
                })
            }
        }
    }

    Ok(values)
}
