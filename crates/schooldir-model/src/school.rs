//! The external school read model.

use serde::{Deserialize, Serialize};

use crate::value::RawValue;

/// A school record as delivered by the content backend.
///
/// Everything beyond `id` and `name` is optional and frequently missing,
/// partially filled, or free text. Normalization into a display-safe shape
/// happens downstream; this struct only mirrors the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    /// Stable identifier, used for shortlisting and share links.
    pub id: String,
    /// Display name.
    pub name: String,
    /// City or area, if provided.
    #[serde(default)]
    pub city: RawValue,
    /// Curriculum label (e.g. "IB", "Cambridge"), if provided.
    #[serde(default)]
    pub curriculum: RawValue,
    /// Aggregate rating, if provided. Zero means "no rating".
    #[serde(default)]
    pub rating: RawValue,
    /// Free-text annual fee range, e.g. "US$17K – US$36K".
    #[serde(default)]
    pub fee_range: Option<String>,
    /// Free-text facility names in source order.
    #[serde(default)]
    pub facilities: Vec<String>,
    /// Lower annual tuition bound in base-currency units.
    #[serde(default)]
    pub tuition_low: Option<i64>,
    /// Upper annual tuition bound in base-currency units.
    #[serde(default)]
    pub tuition_high: Option<i64>,
    /// Live base→USD conversion rate supplied by the backend, if any.
    #[serde(default)]
    pub usd_rate: Option<f64>,
}

impl SchoolRecord {
    /// Minimal record with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: RawValue::Absent,
            curriculum: RawValue::Absent,
            rating: RawValue::Absent,
            fee_range: None,
            facilities: Vec::new(),
            tuition_low: None,
            tuition_high: None,
            usd_rate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SchoolRecord;
    use crate::value::RawValue;

    #[test]
    fn deserializes_sparse_record() {
        let record: SchoolRecord =
            serde_json::from_str(r#"{"id": "bis-jkt", "name": "Example School"}"#).unwrap();
        assert_eq!(record.id, "bis-jkt");
        assert!(record.city.is_absent());
        assert!(record.fee_range.is_none());
        assert!(record.facilities.is_empty());
    }

    #[test]
    fn deserializes_mixed_scalar_rating() {
        let record: SchoolRecord = serde_json::from_str(
            r#"{"id": "x", "name": "X", "rating": 4.5, "city": "Jakarta"}"#,
        )
        .unwrap();
        assert_eq!(record.rating, RawValue::Number(4.5));
        assert_eq!(record.city.as_text(), Some("Jakarta"));
    }
}
