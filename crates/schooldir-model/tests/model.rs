//! Integration tests for the shared domain model.

use schooldir_model::{Currency, DraftRecord, DraftStatus, RawValue, SchoolRecord};

#[test]
fn school_record_round_trips_through_json() {
    let mut record = SchoolRecord::new("bsj", "British School Jakarta");
    record.city = RawValue::from("Jakarta");
    record.fee_range = Some("US$17K – US$36K".to_string());
    record.facilities = vec!["Swimming Pool".to_string(), "Main Library".to_string()];
    record.tuition_low = Some(250_000_000);
    record.tuition_high = Some(550_000_000);

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: SchoolRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn draft_record_parses_with_optional_fields_missing() {
    let json = r#"{
        "title": "Choosing a Curriculum",
        "slug": "choosing-a-curriculum",
        "category": "guides",
        "status": "pending",
        "summary": "How to pick between IB and Cambridge.",
        "content": "...",
        "created_at": "2024-03-01T09:30:00Z"
    }"#;
    let draft: DraftRecord = serde_json::from_str(json).expect("deserialize draft");
    assert_eq!(draft.status, DraftStatus::Pending);
    assert!(draft.author.is_none());
    assert!(draft.images.is_empty());
}

#[test]
fn draft_status_serializes_lowercase() {
    let json = serde_json::to_string(&DraftStatus::Approved).expect("serialize status");
    assert_eq!(json, "\"approved\"");
}

#[test]
fn currency_codes_and_symbols() {
    assert_eq!(Currency::Usd.as_code(), "USD");
    assert_eq!(Currency::Usd.symbol(), "US$");
    assert_eq!(Currency::Idr.symbol(), "Rp");
}
