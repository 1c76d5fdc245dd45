//! Output formatting for the CLI.

use std::time::Duration;

use console::style;
use gift_grid::GiftCard;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print what the service understood from the query.
    pub fn criteria(&self, summary: &[(&'static str, String)]) {
        if self.json || summary.is_empty() {
            return;
        }
        let chips: Vec<String> = summary
            .iter()
            .map(|(label, value)| format!("{}: {}", style(label).dim(), value))
            .collect();
        println!("{}\n", chips.join("  "));
    }

    /// Print one gift card followed by a blank line.
    pub fn gift_card(&self, card: &GiftCard) {
        if self.json {
            return;
        }
        for line in card_lines(card) {
            println!("{}", line);
        }
        println!();
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Terminal rendering of a card: title and price, then description and link.
fn card_lines(card: &GiftCard) -> Vec<String> {
    let price = if card.price_available {
        style(card.display_price.as_str()).green().bold()
    } else {
        style(card.display_price.as_str()).dim()
    };

    let mut lines = vec![format!("{}  {}", style(card.title.as_str()).bold(), price)];
    if !card.display_description.is_empty() {
        lines.push(format!("  {}", card.display_description));
    }
    if let Some(link) = &card.link {
        lines.push(format!("  {}", style(link.href.as_str()).cyan().underlined()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use gift_catalog::GiftResult;
    use gift_grid::ResultGrid;

    #[test]
    fn test_card_lines() {
        console::set_colors_enabled(false);
        let grid = ResultGrid::new("http://localhost:5000");

        let mug = GiftResult::new("1", "Mug")
            .with_description("A nice mug")
            .with_price(9.5)
            .with_affiliate_link("http://x");
        assert_eq!(
            card_lines(&grid.card(&mug)),
            vec!["Mug  £9.50", "  A nice mug", "  http://x"]
        );

        let bare = GiftResult::new("2", "Apron");
        assert_eq!(card_lines(&grid.card(&bare)), vec!["Apron  Price unavailable"]);
    }
}
