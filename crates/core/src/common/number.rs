//! Number parsing and rounding utilities.

/// Parses a base-10 signed 64-bit integer, ignoring surrounding whitespace.
///
/// Returns `None` for empty input, decimals, and values outside `i64`.
///
/// ```
/// use toolbelt_core::common::parse_integer;
///
/// assert_eq!(parse_integer(" 42 "), Some(42));
/// assert_eq!(parse_integer("4.2"), None);
/// ```
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Clamps `value` into `[min, max]`. Bounds given in the wrong order are swapped.
pub fn clamp_i64(value: i64, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    value.clamp(lo, hi)
}

/// Rounds to `places` decimal places (half away from zero).
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
