//! Card grid rendering for gift search results.
//!
//! [`ResultGrid`] is a pure function of the result collection: it holds only
//! display settings, so identical input always yields identical output. An
//! empty collection renders nothing; the surrounding page decides what, if
//! anything, to say about it.

mod card;
mod sections;

use gift_catalog::{Currency, GiftResult};

pub use card::{
    truncate_description, CardImage, GiftCard, OutboundLink, DESCRIPTION_LIMIT, ELLIPSIS,
    PRICE_UNAVAILABLE,
};
pub use sections::{render_criteria, render_error, render_loading};

/// Renders gift results as a grid of cards.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGrid {
    asset_base_url: String,
    currency: Currency,
}

impl ResultGrid {
    /// Grid whose image sources are resolved against `asset_base_url`.
    pub fn new(asset_base_url: impl Into<String>) -> Self {
        Self {
            asset_base_url: asset_base_url.into(),
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// View model for a single gift.
    pub fn card(&self, gift: &GiftResult) -> GiftCard {
        GiftCard::build(gift, &self.asset_base_url, self.currency)
    }

    /// View models for every gift, in input order.
    pub fn cards(&self, results: &[GiftResult]) -> Vec<GiftCard> {
        results.iter().map(|gift| self.card(gift)).collect()
    }

    /// Render the grid section. Empty input renders an empty string.
    pub fn render(&self, results: &[GiftResult]) -> String {
        if results.is_empty() {
            return String::new();
        }

        let cards: Vec<String> = self.cards(results).iter().map(render_card).collect();

        format!(
            r#"<section class="gift-results" data-section="results">
    <div class="gift-grid">
        {}
    </div>
</section>"#,
            cards.join("\n")
        )
    }
}

fn render_card(card: &GiftCard) -> String {
    let image = card
        .image
        .as_ref()
        .map(|img| {
            format!(
                r#"
    <div class="gift-image">
        <img src="{}" alt="{}" loading="lazy">
    </div>"#,
                html_escape(&img.src),
                html_escape(&img.alt)
            )
        })
        .unwrap_or_default();

    let link = card
        .link
        .as_ref()
        .map(|link| {
            format!(
                r#"
        <a href="{}" class="gift-link" target="{}" rel="{}">View Gift</a>"#,
                html_escape(&link.href),
                link.target,
                link.rel
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="gift-card" data-gift-id="{}">{}
    <div class="gift-info">
        <h3 class="gift-title">{}</h3>
        <p class="gift-description">{}</p>
        <div class="gift-price{}">{}</div>{}
    </div>
</article>"#,
        html_escape(&card.key),
        image,
        html_escape(&card.title),
        html_escape(&card.display_description),
        if card.price_available { "" } else { " unavailable" },
        html_escape(&card.display_price),
        link
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ResultGrid {
        ResultGrid::new("http://localhost:5000")
    }

    fn mug() -> GiftResult {
        GiftResult::new("1", "Mug")
            .with_description("A nice mug")
            .with_price(9.5)
            .with_image_path("/img/mug.jpg")
            .with_affiliate_link("http://x")
    }

    // === Empty input ===

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(grid().render(&[]), "");
        assert!(grid().cards(&[]).is_empty());
    }

    // === Card markup ===

    #[test]
    fn test_card_markup() {
        let expected = concat!(
            "<article class=\"gift-card\" data-gift-id=\"1\">\n",
            "    <div class=\"gift-image\">\n",
            "        <img src=\"http://localhost:5000/img/mug.jpg\" alt=\"Mug\" loading=\"lazy\">\n",
            "    </div>\n",
            "    <div class=\"gift-info\">\n",
            "        <h3 class=\"gift-title\">Mug</h3>\n",
            "        <p class=\"gift-description\">A nice mug</p>\n",
            "        <div class=\"gift-price\">£9.50</div>\n",
            "        <a href=\"http://x\" class=\"gift-link\" target=\"_blank\" rel=\"noopener noreferrer\">View Gift</a>\n",
            "    </div>\n",
            "</article>"
        );
        assert_eq!(render_card(&grid().card(&mug())), expected);
    }

    #[test]
    fn test_sparse_card_markup() {
        let gift = GiftResult::new("2", "Apron");
        let expected = concat!(
            "<article class=\"gift-card\" data-gift-id=\"2\">\n",
            "    <div class=\"gift-info\">\n",
            "        <h3 class=\"gift-title\">Apron</h3>\n",
            "        <p class=\"gift-description\"></p>\n",
            "        <div class=\"gift-price unavailable\">Price unavailable</div>\n",
            "    </div>\n",
            "</article>"
        );
        assert_eq!(render_card(&grid().card(&gift)), expected);
    }

    // === Grid ===

    #[test]
    fn test_cards_keep_input_order() {
        let gifts = vec![
            GiftResult::new("9", "Zither").with_price(120.0),
            GiftResult::new("2", "Apron").with_price(20.0),
            GiftResult::new("5", "Mug").with_price(9.5),
        ];

        let html = grid().render(&gifts);
        let positions: Vec<usize> = ["data-gift-id=\"9\"", "data-gift-id=\"2\"", "data-gift-id=\"5\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<article").count(), 3);
    }

    #[test]
    fn test_render_is_deterministic() {
        let gifts = vec![mug(), GiftResult::new("2", "Apron")];
        assert_eq!(grid().render(&gifts), grid().render(&gifts));
    }

    #[test]
    fn test_text_is_escaped() {
        let gift = GiftResult::new("x\"1", "Tom & Jerry <DVD>")
            .with_description("It's \"great\"")
            .with_affiliate_link("http://shop.test/?a=1&b=2");

        let html = grid().render(&[gift]);
        assert!(html.contains("data-gift-id=\"x&quot;1\""));
        assert!(html.contains("Tom &amp; Jerry &lt;DVD&gt;"));
        assert!(html.contains("It&#39;s &quot;great&quot;"));
        assert!(html.contains("href=\"http://shop.test/?a=1&amp;b=2\""));
        assert!(!html.contains("<DVD>"));
    }

    #[test]
    fn test_long_description_truncated_in_markup() {
        let gift = GiftResult::new("3", "Book").with_description("b".repeat(120));
        let html = grid().render(&[gift]);
        assert!(html.contains(&format!("{}…</p>", "b".repeat(100))));
    }

    #[test]
    fn test_currency_and_asset_base() {
        let grid = ResultGrid::new("https://cdn.gifts.test/").with_currency(Currency::EUR);
        let card = grid.card(&mug());
        assert_eq!(card.display_price, "€9.50");
        assert_eq!(card.image.unwrap().src, "https://cdn.gifts.test/img/mug.jpg");
        assert_eq!(grid.currency(), Currency::EUR);
    }
}
