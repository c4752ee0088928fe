//! Input sanitization for free-text numeric fields.

use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("Invalid non-digit regex"));

static SIGNED_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[+-]?[0-9]+").expect("Invalid signed integer regex"));

/// Remove every character that is not an ASCII decimal digit.
///
/// The relative order of the remaining digits is preserved. Full-width digits
/// (e.g. `２`) and other Unicode numerals are removed like any other character.
/// The function is total and idempotent.
pub fn sanitize_digits(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    NON_DIGIT.replace_all(raw, "").into_owned()
}

/// The first signed ASCII integer in `raw`, if any.
///
/// Only the integer part of a decimal is taken (`"2.5"` gives 2). Values
/// beyond `i64` saturate toward their sign, so callers that clamp still land
/// on the matching end of their range.
pub fn first_integer(raw: &str) -> Option<i64> {
    let found = SIGNED_INTEGER.find(raw)?.as_str();
    Some(found.parse::<i64>().unwrap_or(if found.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}
