//! The service's structured reading of a free-text gift description.

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Money};

/// Criteria extracted by the service from the query text.
///
/// Every field is optional; an empty description yields an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GiftCriteria {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl GiftCriteria {
    /// Parse criteria from an arbitrary JSON value, dropping anything that
    /// does not fit instead of failing.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// True when the service extracted nothing.
    pub fn is_empty(&self) -> bool {
        self.summary(Currency::default()).is_empty()
    }

    /// Human-readable label/value pairs, in a stable order.
    pub fn summary(&self, currency: Currency) -> Vec<(&'static str, String)> {
        let mut items = Vec::new();

        if let Some(occasion) = self.occasion.as_deref().filter(|s| !s.is_empty()) {
            items.push(("Occasion", occasion.replace('_', " ")));
        }
        if let Some(relationship) = self.relationship.as_deref().filter(|s| !s.is_empty()) {
            items.push(("For", relationship.to_string()));
        }
        if let Some(age) = self.age {
            items.push(("Age", age.to_string()));
        }
        if let Some(gender) = self.gender.as_deref().filter(|s| !s.is_empty()) {
            items.push(("Gender", gender.to_string()));
        }
        if let Some(budget) = self.max_price.and_then(|p| Money::from_decimal(p, currency)) {
            items.push(("Budget", format!("up to {}", budget.display())));
        }
        if !self.interests.is_empty() {
            items.push(("Interests", self.interests.join(", ")));
        }
        if !self.categories.is_empty() {
            items.push(("Categories", self.categories.join(", ")));
        }

        items
    }
}
