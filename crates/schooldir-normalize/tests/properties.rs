//! Property tests for the normalization layer.

use proptest::collection::vec;
use proptest::prelude::*;

use schooldir_model::RawValue;
use schooldir_normalize::{classify, highest_fee, is_publishable, lowest_fee, sanitize};

/// Facility strings biased toward the matcher keywords so the featured
/// path is actually exercised, mixed with arbitrary noise.
fn facility_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Swimming Pool".to_string()),
        Just("25m pool".to_string()),
        Just("Main Library".to_string()),
        Just("Science Lab".to_string()),
        Just("Football Pitch".to_string()),
        Just("Gym".to_string()),
        Just("Chess Club".to_string()),
        Just("  ".to_string()),
        "[A-Za-z ]{0,16}",
    ]
}

proptest! {
    #[test]
    fn sanitize_is_total_and_idempotent(raw in ".*") {
        let fallback = "Not available";
        let once = sanitize(&RawValue::from(raw), fallback);
        let twice = sanitize(&RawValue::from(once.clone()), fallback);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fee_bounds_are_ordered(text in ".*") {
        let high = highest_fee(&text);
        let low = lowest_fee(&text);
        if high > 0.0 {
            prop_assert!(high >= low);
        }
    }

    #[test]
    fn text_without_k_tokens_is_never_publishable(text in "[^kK]*") {
        prop_assert_eq!(highest_fee(&text), 0.0);
        prop_assert_eq!(lowest_fee(&text), 0.0);
        prop_assert!(!is_publishable(&text));
    }

    #[test]
    fn classify_partitions_every_input(facilities in vec(facility_strategy(), 0..10)) {
        let tiered = classify(&facilities);
        let mut expected: Vec<String> = facilities
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        let mut actual: Vec<String> = tiered
            .matches
            .iter()
            .map(|m| m.source.clone())
            .chain(tiered.remaining.iter().cloned())
            .collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn featured_order_survives_input_reversal(facilities in vec(facility_strategy(), 0..10)) {
        let forward = classify(&facilities);
        let mut reversed = facilities.clone();
        reversed.reverse();
        prop_assert_eq!(forward.featured, classify(&reversed).featured);
    }
}
