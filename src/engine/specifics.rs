//! Deriving specifics from variant text and comparing them to mapping specifics.

use crate::domain::primitives::first_non_empty;
use crate::domain::Specifics;
use std::collections::BTreeMap;

/// Parse `"Color: Red; Size: XL"` into ordered specifics.
///
/// Parts are separated by `,` or `;`; each part splits on its first `:` into
/// a trimmed key and value. Parts without a colon are dropped.
pub fn parse_variant_specifics(variant: &str) -> Specifics {
    variant
        .split([',', ';'])
        .filter_map(|part| part.split_once(':'))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect()
}

/// Whether every expected specific is present in `actual` with an equal value.
///
/// Keys are looked up verbatim, then lower-cased; a missing key reads as `""`.
/// Values compare case-insensitively. An empty expectation never matches.
pub fn specifics_match(
    expected: Option<&Specifics>,
    actual: Option<&BTreeMap<String, String>>,
) -> bool {
    let (Some(expected), Some(actual)) = (expected, actual) else {
        return false;
    };
    if expected.is_empty() {
        return false;
    }

    expected.iter().all(|(key, value)| {
        let found = first_non_empty([
            actual.get(key).map(String::as_str),
            actual.get(&key.to_lowercase()).map(String::as_str),
        ]);
        found.to_lowercase() == value.to_lowercase()
    })
}
