//! The search command: one query, one settled result set.

use std::fs;

use anyhow::{bail, Context as _, Result};
use gift_grid::{render_criteria, render_error, ResultGrid};
use gift_search::{SearchOrchestrator, SearchPhase, SearchState};
use tracing::debug;

use super::SearchArgs;
use crate::context::Context;

/// Shown when a search succeeds with no gifts.
const NO_GIFTS: &str = "No gifts found for that description. Try adding interests or a budget.";

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.query.join(" ");
    let service = ctx
        .config
        .search_config(args.base_url.as_deref(), args.timeout);
    let orchestrator =
        SearchOrchestrator::from_config(&service).context("Invalid service configuration")?;
    let grid = ResultGrid::new(ctx.config.asset_base_url(&service))
        .with_currency(ctx.config.display.currency);

    ctx.output.debug(&format!("POST {}", service.endpoint()));

    let mut updates = orchestrator.subscribe();
    let handle = orchestrator.search(query);
    let spinner = ctx.output.spinner("Finding gifts...");

    let state = loop {
        let current = updates.borrow_and_update().clone();
        if current.generation() == handle.generation() && current.phase().is_settled() {
            break current;
        }
        if updates.changed().await.is_err() {
            break orchestrator.state();
        }
    };
    spinner.finish_and_clear();
    debug!(phase = state.phase().as_str(), results = state.results().len(), "search settled");

    if let Some(path) = &args.html {
        let path = ctx.resolve_path(path);
        fs::write(&path, render_page(&state, &grid))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        ctx.output.success(&format!("Wrote {}", path.display()));
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "state": state,
            "cards": grid.cards(state.results()),
        }));
    } else if args.html.is_none() {
        print_results(&state, &grid, ctx);
    }

    if state.phase() == SearchPhase::Error {
        bail!("{}", state.error_detail().unwrap_or_default());
    }

    Ok(())
}

fn print_results(state: &SearchState, grid: &ResultGrid, ctx: &Context) {
    if state.phase() != SearchPhase::Ok {
        return;
    }

    if let Some(criteria) = state.criteria().filter(|c| !c.is_empty()) {
        ctx.output.criteria(&criteria.summary(grid.currency()));
    }

    if state.results().is_empty() {
        ctx.output.info(NO_GIFTS);
        return;
    }

    for card in grid.cards(state.results()) {
        ctx.output.gift_card(&card);
    }
}

/// Standalone HTML page for a settled search.
pub fn render_page(state: &SearchState, grid: &ResultGrid) -> String {
    let body = match state.phase() {
        SearchPhase::Error => render_error(state.error_detail().unwrap_or_default()),
        _ if state.results().is_empty() => {
            format!(r#"<p class="no-results">{}</p>"#, NO_GIFTS)
        }
        _ => grid.render(state.results()),
    };
    let criteria = state
        .criteria()
        .map(|c| render_criteria(c, grid.currency()))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Gift ideas</title>
</head>
<body>
{}
{}
</body>
</html>
"#,
        criteria, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gift_catalog::{Currency, GiftCriteria, GiftResult};
    use gift_search::{FailureKind, TRANSPORT_FAILURE_DETAIL};

    fn grid() -> ResultGrid {
        ResultGrid::new("http://localhost:5000")
    }

    #[test]
    fn test_page_with_results() {
        let mug = GiftResult::new("1", "Mug").with_price(9.5);
        let state = SearchState::settled_ok("gift for mum", 1, vec![mug], None);

        let page = render_page(&state, &grid());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"data-gift-id="1""#));
        assert!(page.contains("£9.50"));
        assert!(!page.contains("no-results"));
    }

    #[test]
    fn test_page_without_results_says_so() {
        let state = SearchState::settled_ok("anything", 1, Vec::new(), None);
        let page = render_page(&state, &grid());
        assert!(page.contains(NO_GIFTS));
        assert!(!page.contains("<article"));
    }

    #[test]
    fn test_page_with_error_panel() {
        let state = SearchState::transport_failure("mug", 2);
        let page = render_page(&state, &grid());
        assert!(page.contains(TRANSPORT_FAILURE_DETAIL));
        assert!(page.contains(r#"role="alert""#));

        let logical = SearchState::settled_error("mug", 3, FailureKind::Logical, "no matches");
        assert!(render_page(&logical, &grid()).contains("<p>no matches</p>"));
    }

    #[test]
    fn test_page_shows_criteria_in_grid_currency() {
        let criteria = GiftCriteria {
            max_price: Some(25.0),
            ..GiftCriteria::default()
        };
        let state = SearchState::settled_ok("under 25", 1, Vec::new(), Some(criteria));

        let page = render_page(&state, &ResultGrid::new("").with_currency(Currency::USD));
        assert!(page.contains("up to $25.00"));
    }
}
