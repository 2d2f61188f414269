//! TXT key/value module tests.

use super::*;
use crate::config::ValueType;
use crate::error_handling::LookupError;

fn records(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|r| r.to_string()).collect()
}

fn sample_records() -> Vec<String> {
    records(&["foo=bar", "key=value", "things=item1", "things=item2"])
}

#[test]
fn test_parse_record_without_separator_is_ignored() {
    assert_eq!(parse_record(""), None);
    assert_eq!(parse_record("just some text"), None);
    assert_eq!(parse_record("google-site-verification:abc"), None);
}

#[test]
fn test_parse_record_splits_on_first_separator() {
    assert_eq!(parse_record("key=value"), Some(("key", "value")));
    assert_eq!(parse_record("k=a=b=c"), Some(("k", "a=b=c")));
    assert_eq!(parse_record("k=="), Some(("k", "=")));
}

#[test]
fn test_parse_record_allows_empty_parts() {
    assert_eq!(parse_record("k="), Some(("k", "")));
    assert_eq!(parse_record("=v"), Some(("", "v")));
    assert_eq!(parse_record("="), Some(("", "")));
}

#[test]
fn test_parse_record_does_not_trim() {
    assert_eq!(parse_record(" key = value "), Some((" key ", " value ")));
}

#[test]
fn test_lookup_single_match() {
    let values = lookup_values(&sample_records(), "key", &[], ValueType::Single).unwrap();
    assert_eq!(values, vec!["value"]);
}

#[test]
fn test_lookup_single_no_match_no_default() {
    let err = lookup_values(&sample_records(), "missing", &[], ValueType::Single).unwrap_err();
    assert_eq!(
        err,
        LookupError::NoValue {
            key: "missing".to_string()
        }
    );
}

#[test]
fn test_lookup_single_too_many_values_reports_count() {
    let err = lookup_values(&sample_records(), "things", &[], ValueType::Single).unwrap_err();
    assert_eq!(
        err,
        LookupError::TooManyValues {
            key: "things".to_string(),
            count: 2
        }
    );

    let many = records(&["k=1", "k=2", "k=3", "other=4", "k=5"]);
    let err = lookup_values(&many, "k", &[], ValueType::Single).unwrap_err();
    assert_eq!(
        err,
        LookupError::TooManyValues {
            key: "k".to_string(),
            count: 4
        }
    );
}

#[test]
fn test_lookup_list_preserves_order_and_duplicates() {
    let raw = records(&["k=b", "x=1", "k=a", "k=b"]);
    let values = lookup_values(&raw, "k", &[], ValueType::List).unwrap();
    assert_eq!(values, vec!["b", "a", "b"]);
}

#[test]
fn test_lookup_list_never_fails_on_cardinality() {
    let raw = sample_records();
    assert!(lookup_values(&raw, "missing", &[], ValueType::List)
        .unwrap()
        .is_empty());
    assert_eq!(
        lookup_values(&raw, "foo", &[], ValueType::List).unwrap(),
        vec!["bar"]
    );
    assert_eq!(
        lookup_values(&raw, "things", &[], ValueType::List).unwrap(),
        vec!["item1", "item2"]
    );
}

#[test]
fn test_lookup_key_match_is_exact() {
    let raw = records(&["K =spaced", "k=lower", "K=upper"]);
    assert_eq!(
        lookup_values(&raw, "K", &[], ValueType::List).unwrap(),
        vec!["upper"]
    );
    assert_eq!(
        lookup_values(&raw, "K ", &[], ValueType::List).unwrap(),
        vec!["spaced"]
    );
    assert!(lookup_values(&raw, " K", &[], ValueType::List)
        .unwrap()
        .is_empty());
}

#[test]
fn test_lookup_empty_value_is_a_match() {
    let raw = records(&["k="]);
    let defaults = vec!["fallback".to_string()];
    let values = lookup_values(&raw, "k", &defaults, ValueType::Single).unwrap();
    assert_eq!(values, vec![""]);
}

#[test]
fn test_lookup_defaults_replace_empty_result() {
    let defaults = vec!["42".to_string()];
    let values = lookup_values::<String>(&[], "theanswer", &defaults, ValueType::Single).unwrap();
    assert_eq!(values, vec!["42"]);

    let defaults = vec!["z".to_string(), "a".to_string(), "z".to_string()];
    let values = lookup_values(&sample_records(), "nope", &defaults, ValueType::List).unwrap();
    assert_eq!(values, defaults);
}

#[test]
fn test_lookup_defaults_ignored_when_key_matches() {
    let defaults = vec!["d1".to_string(), "d2".to_string()];
    let values = lookup_values(&sample_records(), "things", &defaults, ValueType::List).unwrap();
    assert_eq!(values, vec!["item1", "item2"]);

    let defaults = vec!["ignored".to_string()];
    let values = lookup_values(&sample_records(), "key", &defaults, ValueType::Single).unwrap();
    assert_eq!(values, vec!["value"]);
}

#[test]
fn test_lookup_single_rejects_multiple_defaults() {
    let defaults = vec!["a".to_string(), "b".to_string()];
    let err = lookup_values::<String>(&[], "k", &defaults, ValueType::Single).unwrap_err();
    assert_eq!(
        err,
        LookupError::TooManyValues {
            key: "k".to_string(),
            count: 2
        }
    );
}

#[test]
fn test_lookup_is_deterministic() {
    let raw = sample_records();
    let defaults = vec!["d".to_string()];
    for key in ["key", "things", "missing"] {
        for value_type in [ValueType::Single, ValueType::List] {
            let first = lookup_values(&raw, key, &defaults, value_type);
            let second = lookup_values(&raw, key, &defaults, value_type);
            assert_eq!(first, second, "key {key:?} in {value_type} mode");
        }
    }
}

#[test]
fn test_lookup_skips_records_without_separator() {
    let raw = records(&["free text", "k=v", "another free text"]);
    assert_eq!(
        lookup_values(&raw, "k", &[], ValueType::Single).unwrap(),
        vec!["v"]
    );
}

#[test]
fn test_lookup_accepts_borrowed_records() {
    let raw = ["a=1", "b=2"];
    assert_eq!(
        lookup_values(&raw, "b", &[], ValueType::Single).unwrap(),
        vec!["2"]
    );
}
