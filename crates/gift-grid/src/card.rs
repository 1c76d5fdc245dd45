//! Per-gift view model.

use gift_catalog::{Currency, GiftResult};
use serde::Serialize;

/// Maximum number of characters of a description shown on a card.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Appended to descriptions cut at [`DESCRIPTION_LIMIT`].
pub const ELLIPSIS: char = '…';

/// Shown in place of a price the service did not provide.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Everything a renderer needs to draw one gift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GiftCard {
    pub key: String,
    pub title: String,
    pub display_description: String,
    pub display_price: String,
    pub price_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<CardImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<OutboundLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

/// A hyperlink that opens in a new browsing context without an opener.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl OutboundLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

impl GiftCard {
    pub(crate) fn build(gift: &GiftResult, asset_base_url: &str, currency: Currency) -> Self {
        let (display_price, price_available) = match gift.price_in(currency) {
            Some(money) => (money.display(), true),
            None => (PRICE_UNAVAILABLE.to_string(), false),
        };

        Self {
            key: gift.id.to_string(),
            title: gift.name.clone(),
            display_description: truncate_description(gift.description_text()),
            display_price,
            price_available,
            image: gift.visible_image_path().map(|path| CardImage {
                src: asset_url(asset_base_url, path),
                alt: gift.name.clone(),
            }),
            link: gift.affiliate_link.as_deref().map(OutboundLink::new),
        }
    }
}

/// First [`DESCRIPTION_LIMIT`] characters, plus [`ELLIPSIS`] when anything was cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len_utf8());
            out.push_str(&text[..cut]);
            out.push(ELLIPSIS);
            out
        }
        None => text.to_string(),
    }
}

fn asset_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), path)
    } else {
        format!("{base}{path}")
    }
}
