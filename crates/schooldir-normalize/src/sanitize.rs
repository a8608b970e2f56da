//! Missing-value sanitization for scalar display fields.
//!
//! Source records use several shapes for "no data": absent fields, `null`,
//! the literal text "null", the empty string, and zero. None of the
//! directory's scalar fields (fees, ratings, counts) has a legitimate zero
//! value, so zero is classified as missing rather than rendered.

use schooldir_model::RawValue;

/// Canonicalize a scalar for display, substituting `fallback` when the
/// value is semantically missing.
///
/// Total and idempotent: feeding the output back in with the same fallback
/// returns the same string.
pub fn sanitize(value: &RawValue, fallback: &str) -> String {
    match present_text(value) {
        Some(text) => text,
        None => fallback.to_string(),
    }
}

/// Returns true when the value would be replaced by the fallback.
pub fn is_missing(value: &RawValue) -> bool {
    present_text(value).is_none()
}

/// Renders the value as trimmed text, or `None` when missing.
///
/// Missing means: absent, empty after trimming, the literal "null"
/// (case-insensitive), or zero (textual "0" or numeric 0).
fn present_text(value: &RawValue) -> Option<String> {
    let text = match value {
        RawValue::Absent => return None,
        RawValue::Number(number) => format_numeric(*number),
        RawValue::Text(text) => text.trim().to_string(),
    };
    if text.is_empty() || text == "0" || text.eq_ignore_ascii_case("null") {
        return None;
    }
    Some(text)
}

/// Formats a number without a trailing ".0" for whole values.
pub fn format_numeric(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        format!("{number}")
    }
}

#[cfg(test)]
mod tests {
    use super::{is_missing, sanitize};
    use schooldir_model::RawValue;

    #[test]
    fn test_missing_shapes_fall_back() {
        let fallback = "Not available";
        assert_eq!(sanitize(&RawValue::Absent, fallback), fallback);
        assert_eq!(sanitize(&RawValue::from(""), fallback), fallback);
        assert_eq!(sanitize(&RawValue::from("   "), fallback), fallback);
        assert_eq!(sanitize(&RawValue::from("null"), fallback), fallback);
        assert_eq!(sanitize(&RawValue::from("NULL"), fallback), fallback);
        assert_eq!(sanitize(&RawValue::from("0"), fallback), fallback);
        assert_eq!(sanitize(&RawValue::Number(0.0), fallback), fallback);
    }

    #[test]
    fn test_present_values_are_trimmed_original_case() {
        assert_eq!(sanitize(&RawValue::from("  Jakarta  "), "x"), "Jakarta");
        assert_eq!(sanitize(&RawValue::from("IB Diploma"), "x"), "IB Diploma");
        assert_eq!(sanitize(&RawValue::Number(4.5), "x"), "4.5");
        assert_eq!(sanitize(&RawValue::Number(12.0), "x"), "12");
    }

    #[test]
    fn test_is_missing_matches_sanitize() {
        assert!(is_missing(&RawValue::from("0")));
        assert!(is_missing(&RawValue::Absent));
        assert!(!is_missing(&RawValue::from("Jakarta")));
    }

    #[test]
    fn test_idempotent() {
        let fallback = "Not available";
        for raw in ["  Jakarta  ", "", "0", "null", "4.5"] {
            let once = sanitize(&RawValue::from(raw), fallback);
            let twice = sanitize(&RawValue::from(once.clone()), fallback);
            assert_eq!(once, twice, "input {raw:?}");
        }
    }
}
