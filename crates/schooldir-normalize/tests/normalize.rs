//! End-to-end checks of the normalization contract.

use schooldir_model::{Currency, FacilityCategory, RawValue};
use schooldir_normalize::{
    classify, convert_base_to_usd, display_fee, fee_range_display, highest_fee, is_publishable,
    lowest_fee, sanitize,
};

#[test]
fn published_fee_range_parses_both_bounds() {
    let text = "US$17K – US$36K";
    assert_eq!(highest_fee(text), 36.0);
    assert_eq!(lowest_fee(text), 17.0);
    assert!(is_publishable(text));
}

#[test]
fn not_public_renders_the_fixed_phrase() {
    let none: [&str; 0] = [];
    assert_eq!(display_fee("Not public", "any", none), "Fees not published");
    assert!(!is_publishable("Not public"));
}

#[test]
fn facility_list_splits_into_featured_and_remaining() {
    let tiered = classify(&["Swimming Pool", "Main Library", "Chess Club"]);
    assert_eq!(
        tiered.featured,
        vec![FacilityCategory::Pool, FacilityCategory::Library]
    );
    assert_eq!(tiered.remaining, vec!["Chess Club".to_string()]);
}

#[test]
fn sanitize_spec_scenarios() {
    assert_eq!(sanitize(&RawValue::from("0"), "Not available"), "Not available");
    assert_eq!(sanitize(&RawValue::from("  Jakarta  "), "x"), "Jakarta");
}

#[test]
fn fallback_rate_conversion_is_repeatable() {
    let first = convert_base_to_usd(480_000_000, None);
    for _ in 0..3 {
        assert_eq!(convert_base_to_usd(480_000_000, None), first);
    }
}

#[test]
fn base_currency_range_skips_conversion() {
    assert_eq!(
        fee_range_display(300_000_000, 600_000_000, Currency::Idr, None),
        "Rp300M – Rp600M"
    );
}
