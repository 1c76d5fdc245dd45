//! HTML sections around the grid: loading, error, interpreted criteria.

use gift_catalog::{Currency, GiftCriteria};

use crate::html_escape;

/// Indeterminate progress indicator shown while a search is in flight.
pub fn render_loading() -> String {
    r#"<section class="gift-results loading" data-section="results" aria-busy="true">
    <div class="spinner" role="status">
        <span class="visually-hidden">Finding gifts…</span>
    </div>
</section>"#
        .to_string()
}

/// Error panel surfacing the failure detail.
pub fn render_error(detail: &str) -> String {
    format!(
        r#"<section class="gift-results error" data-section="results">
    <div class="error-state" role="alert">
        <h2>Unable to find gifts</h2>
        <p>{}</p>
    </div>
</section>"#,
        html_escape(detail)
    )
}

/// Summary chips of what the service understood from the query.
///
/// Renders nothing when the criteria carry no fields.
pub fn render_criteria(criteria: &GiftCriteria, currency: Currency) -> String {
    let chips: Vec<String> = criteria
        .summary(currency)
        .into_iter()
        .map(|(label, value)| {
            format!(
                r#"<li class="criteria-chip"><span class="criteria-label">{}</span> {}</li>"#,
                label,
                html_escape(&value)
            )
        })
        .collect();

    if chips.is_empty() {
        return String::new();
    }

    format!(
        r#"<section class="gift-criteria" data-section="criteria">
    <ul class="criteria-chips">
        {}
    </ul>
</section>"#,
        chips.join("\n        ")
    )
}
