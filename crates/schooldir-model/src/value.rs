//! Raw scalar values as they arrive from source records.

use serde::{Deserialize, Serialize};

/// A scalar source field: text, a number, or absent entirely.
///
/// Source records are heterogeneous — the same field may arrive as a
/// string, a number, `null`, or be missing from the record. `RawValue`
/// captures all four shapes so the sanitizer can classify them uniformly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Free-text value, untrimmed.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Field was `null` or not present.
    #[default]
    Absent,
}

impl RawValue {
    /// Returns the text content when the value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true when the value is the `Absent` variant.
    ///
    /// Note this is structural absence only; the sanitizer additionally
    /// treats "", "null", and zero as semantically missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, RawValue::Absent)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        RawValue::Number(number)
    }
}

#[cfg(test)]
mod tests {
    use super::RawValue;

    #[test]
    fn deserializes_heterogeneous_scalars() {
        let text: RawValue = serde_json::from_str("\"Jakarta\"").unwrap();
        assert_eq!(text, RawValue::Text("Jakarta".to_string()));

        let number: RawValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(number, RawValue::Number(4.5));

        let absent: RawValue = serde_json::from_str("null").unwrap();
        assert!(absent.is_absent());
    }
}
