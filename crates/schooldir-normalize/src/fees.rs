//! Fee-range parsing.
//!
//! Fee ranges arrive as free text with zero or more `<prefix><number>K`
//! tokens, e.g. "US$17K – US$36K" or "From US$5.5K per term". The parser
//! collects every K-suffixed number regardless of surrounding text and
//! derives min/max bounds in thousands of USD.
//!
//! 0 is the documented "no data" sentinel for both bounds; it is never a
//! real fee. Bare numbers without the K suffix are deliberately ignored so
//! unrelated digits ("est. 1995") cannot be mistaken for fees. The flip
//! side is a known false-positive risk: a grade level written as "12K"
//! would be collected as a fee token.

use regex::Regex;

/// Phrases that mark a fee range as intentionally unpublished.
pub const UNPUBLISHED_PHRASES: [&str; 3] =
    ["Not public", "Not published", "Fees not published"];

/// Fixed display phrase for schools that do not publish fees.
pub const FEES_NOT_PUBLISHED: &str = "Fees not published";

/// One fee token: digits with an optional decimal part, directly followed
/// by the K suffix.
const FEE_TOKEN_PATTERN: &str = r"(\d+(?:\.\d+)?)[Kk]";

/// All K-suffixed fee tokens found in the text, in order of appearance.
pub fn fee_tokens(text: &str) -> Vec<f64> {
    let Ok(pattern) = Regex::new(FEE_TOKEN_PATTERN) else {
        return Vec::new();
    };
    pattern
        .captures_iter(text)
        .filter_map(|token| token[1].parse::<f64>().ok())
        .collect()
}

/// Highest fee bound in thousands of USD, or 0 when nothing parses.
pub fn highest_fee(text: &str) -> f64 {
    fee_tokens(text).into_iter().fold(0.0, f64::max)
}

/// Lowest fee bound in thousands of USD, or 0 when nothing parses.
pub fn lowest_fee(text: &str) -> f64 {
    let tokens = fee_tokens(text);
    if tokens.is_empty() {
        return 0.0;
    }
    tokens.into_iter().fold(f64::INFINITY, f64::min)
}

/// True when the fee range carries a real, displayable figure.
///
/// False for the unpublished sentinel phrases and for any text with no
/// parseable non-zero token.
pub fn is_publishable(text: &str) -> bool {
    let trimmed = text.trim();
    if UNPUBLISHED_PHRASES.contains(&trimmed) {
        return false;
    }
    highest_fee(trimmed) > 0.0
}

/// Display form of a fee range.
///
/// Returns the fixed "Fees not published" phrase when the school is on the
/// unpublished override list or the text is the "Not public" sentinel;
/// otherwise the trimmed input verbatim.
pub fn display_fee<I, S>(text: &str, school_id: &str, unpublished_ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trimmed = text.trim();
    let overridden = unpublished_ids
        .into_iter()
        .any(|id| id.as_ref() == school_id);
    if overridden || trimmed == "Not public" {
        return FEES_NOT_PUBLISHED.to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::{display_fee, fee_tokens, highest_fee, is_publishable, lowest_fee};

    #[test]
    fn test_range_with_two_tokens() {
        let text = "US$17K – US$36K";
        assert_eq!(lowest_fee(text), 17.0);
        assert_eq!(highest_fee(text), 36.0);
        assert!(is_publishable(text));
    }

    #[test]
    fn test_decimal_tokens() {
        assert_eq!(fee_tokens("From US$5.5K per term"), vec![5.5]);
        assert_eq!(highest_fee("S$8.25k to S$12k"), 12.0);
    }

    #[test]
    fn test_three_or_more_tokens() {
        let text = "US$9K (KG), US$14K (Primary), US$21K (Secondary)";
        assert_eq!(lowest_fee(text), 9.0);
        assert_eq!(highest_fee(text), 21.0);
    }

    #[test]
    fn test_bare_numbers_do_not_match() {
        assert!(fee_tokens("Founded 1995, 1200 students").is_empty());
        assert_eq!(highest_fee("Founded 1995"), 0.0);
        assert!(!is_publishable("Founded 1995"));
    }

    #[test]
    fn test_k_suffix_without_digits_ignored() {
        assert!(fee_tokens("Grades K-12").is_empty());
        assert!(fee_tokens("17. K").is_empty());
    }

    #[test]
    fn test_unpublished_sentinels() {
        assert!(!is_publishable("Not public"));
        assert!(!is_publishable("  Not published  "));
        assert!(!is_publishable(""));
    }

    #[test]
    fn test_display_fee_not_public() {
        let none: [&str; 0] = [];
        assert_eq!(display_fee("Not public", "bsj", none), "Fees not published");
    }

    #[test]
    fn test_display_fee_override_list() {
        assert_eq!(
            display_fee("US$17K – US$36K", "bsj", ["bsj"]),
            "Fees not published"
        );
        assert_eq!(
            display_fee(" US$17K – US$36K ", "other", ["bsj"]),
            "US$17K – US$36K"
        );
    }
}
