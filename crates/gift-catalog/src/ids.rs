//! Opaque gift identifier.
//!
//! The service emits database row ids as JSON integers, but nothing on this
//! side relies on that; ids are held as text and only compared for equality.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a gift within a single response; the render key of its card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct GiftId(String);

/// Accepted wire representations of an id.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Float(f64),
    Text(String),
}

impl From<WireId> for GiftId {
    fn from(raw: WireId) -> Self {
        match raw {
            WireId::Number(n) => Self(n.to_string()),
            // `1.0` and `1` name the same row.
            WireId::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Self((f as i64).to_string()),
            WireId::Float(f) => Self(f.to_string()),
            WireId::Text(s) => Self(s),
        }
    }
}

impl GiftId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GiftId> for String {
    fn from(id: GiftId) -> Self {
        id.0
    }
}

impl From<&str> for GiftId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for GiftId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_json_integer() {
        let id: GiftId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_id_from_json_string() {
        let id: GiftId = serde_json::from_str(r#""bx-1093""#).unwrap();
        assert_eq!(id, GiftId::new("bx-1093"));
    }

    #[test]
    fn test_id_from_json_float() {
        let whole: GiftId = serde_json::from_str("1.0").unwrap();
        assert_eq!(whole, GiftId::from(1_i64));

        let fractional: GiftId = serde_json::from_str("2.5").unwrap();
        assert_eq!(fractional.as_str(), "2.5");
    }

    #[test]
    fn test_id_rejects_null() {
        assert!(serde_json::from_str::<GiftId>("null").is_err());
    }

    #[test]
    fn test_id_equality_across_representations() {
        let from_number: GiftId = serde_json::from_str("7").unwrap();
        let from_text: GiftId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number, GiftId::from(7_i64));
    }
}
