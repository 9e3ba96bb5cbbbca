//! Type guards for loosely-typed input.

use super::number::parse_integer;

/// True when the string is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True for `Some` value that is not blank.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !is_blank(v))
}

/// True when the trimmed string is a base-10 signed 64-bit integer.
///
/// This is the same rule the enumeration normalizer uses to decide whether a
/// string code should become an integer code.
pub fn is_integer_str(value: &str) -> bool {
    parse_integer(value).is_some()
}

/// True when the trimmed string parses as a finite number (integer or decimal).
pub fn is_numeric_str(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_is_present() {
        assert!(is_present(Some("value")));
        assert!(!is_present(Some("  ")));
        assert!(!is_present(None));
    }

    #[test]
    fn test_is_integer_str() {
        assert!(is_integer_str("42"));
        assert!(is_integer_str(" -7 "));
        assert!(!is_integer_str("4.2"));
        assert!(!is_integer_str("forty-two"));
        assert!(!is_integer_str(""));
    }

    #[test]
    fn test_is_numeric_str() {
        assert!(is_numeric_str("4.2"));
        assert!(is_numeric_str("-1e3"));
        assert!(is_numeric_str("12"));
        assert!(!is_numeric_str("NaN"));
        assert!(!is_numeric_str("inf"));
        assert!(!is_numeric_str("abc"));
        assert!(!is_numeric_str(" "));
    }
}
