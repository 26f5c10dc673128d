//! Text to number coercion for raw form and command-line values.
//!
//! Calculators never fail on bad input. Anything that does not start with a
//! number becomes `0.0`, so a blank field simply drops out of the arithmetic.

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid numeric prefix pattern")
});

/// Coerce a raw text value to a finite number.
///
/// Leading/trailing whitespace, a leading `$`, thousands separators and a
/// trailing `%` are ignored. The longest leading decimal prefix is parsed, so
/// `"12abc"` is `12.0`. Empty, non-numeric or non-finite text yields `0.0`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let value = NUMERIC_PREFIX
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() {
        value
    } else {
        tracing::debug!("Coerced out-of-range value '{}' to 0", raw);
        0.0
    }
}

/// Coerce an optional raw value, treating a missing value as blank.
pub fn coerce_optional(raw: Option<&str>) -> f64 {
    raw.map(coerce_number).unwrap_or(0.0)
}
