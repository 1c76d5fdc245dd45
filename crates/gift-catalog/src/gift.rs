//! Gift records as returned by the matching service.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::ids::GiftId;
use crate::money::{Currency, Money};

/// One matched product record.
///
/// Only `id` is mandatory. Every other field tolerates being absent or
/// `null` so that one sloppy record never fails the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftResult {
    pub id: GiftId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl GiftResult {
    /// Create a gift with just an id and a name.
    pub fn new(id: impl Into<GiftId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price: None,
            image_path: None,
            affiliate_link: None,
            category: None,
            tags: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the image path.
    pub fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    /// Set the affiliate link.
    pub fn with_affiliate_link(mut self, link: impl Into<String>) -> Self {
        self.affiliate_link = Some(link.into());
        self
    }

    /// Description text, empty when absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Price in the display currency, `None` when missing or not a number.
    pub fn price_in(&self, currency: Currency) -> Option<Money> {
        self.price.and_then(|p| Money::from_decimal(p, currency))
    }

    /// Image path, only when present and non-empty.
    pub fn visible_image_path(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|p| !p.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a number, a numeric string, or anything else (read as missing).
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WirePrice {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<WirePrice>::deserialize(deserializer)? {
        Some(WirePrice::Number(n)) => Some(n),
        Some(WirePrice::Text(s)) => s.trim().parse().ok(),
        Some(WirePrice::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record() {
        let gift: GiftResult = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Mug",
                "description": "A nice mug",
                "price": 9.5,
                "category": "home",
                "affiliate_link": "http://x",
                "tags": ["mum", "tea"],
                "image_path": "/img/mug.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(gift.id.as_str(), "1");
        assert_eq!(gift.name, "Mug");
        assert_eq!(gift.description_text(), "A nice mug");
        assert_eq!(gift.price, Some(9.5));
        assert_eq!(gift.visible_image_path(), Some("/img/mug.jpg"));
        assert_eq!(gift.affiliate_link.as_deref(), Some("http://x"));
        assert_eq!(gift.category.as_deref(), Some("home"));
        assert_eq!(gift.tags, vec!["mum", "tea"]);
    }

    #[test]
    fn test_sparse_record() {
        let gift: GiftResult = serde_json::from_str(r#"{"id": "g-9"}"#).unwrap();
        assert_eq!(gift.name, "");
        assert_eq!(gift.description_text(), "");
        assert_eq!(gift.price, None);
        assert_eq!(gift.visible_image_path(), None);
        assert!(gift.tags.is_empty());
    }

    #[test]
    fn test_null_fields() {
        let gift: GiftResult = serde_json::from_str(
            r#"{"id": 3, "name": null, "description": null, "price": null,
                "image_path": null, "affiliate_link": null, "tags": null}"#,
        )
        .unwrap();
        assert_eq!(gift.name, "");
        assert_eq!(gift.price, None);
        assert!(gift.tags.is_empty());
    }

    #[test]
    fn test_price_variants() {
        let text: GiftResult = serde_json::from_str(r#"{"id": 1, "price": " 12.99 "}"#).unwrap();
        assert_eq!(text.price, Some(12.99));

        let junk: GiftResult = serde_json::from_str(r#"{"id": 1, "price": "call us"}"#).unwrap();
        assert_eq!(junk.price, None);

        let wrong_type: GiftResult = serde_json::from_str(r#"{"id": 1, "price": [1]}"#).unwrap();
        assert_eq!(wrong_type.price, None);
    }

    #[test]
    fn test_empty_image_path_is_not_visible() {
        let gift = GiftResult::new("1", "Mug").with_image_path("");
        assert_eq!(gift.visible_image_path(), None);
    }

    #[test]
    fn test_price_in_currency() {
        let gift = GiftResult::new("1", "Mug").with_price(9.5);
        assert_eq!(gift.price_in(Currency::GBP).unwrap().display(), "\u{00a3}9.50");
        assert!(GiftResult::new("2", "Mystery").price_in(Currency::GBP).is_none());
    }
}
