//! Search lifecycle state.

use gift_catalog::{GiftCriteria, GiftResult};
use serde::Serialize;

/// Detail shown for every failure that produced no structured response.
pub const TRANSPORT_FAILURE_DETAIL: &str =
    "Could not reach the gift service. Check your connection and try again.";

/// Discrete stage of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Ok,
    Error,
}

impl SearchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPhase::Idle => "idle",
            SearchPhase::Loading => "loading",
            SearchPhase::Ok => "ok",
            SearchPhase::Error => "error",
        }
    }

    /// `ok` or `error`.
    pub fn is_settled(&self) -> bool {
        matches!(self, SearchPhase::Ok | SearchPhase::Error)
    }
}

/// Why a search ended in [`SearchPhase::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The service ran and reported `success: false`.
    Logical,
    /// No structured response: network, status, or parse failure.
    Transport,
}

/// Everything the rendering layer may observe about the current search.
///
/// Only constructible through the phase constructors below, which keep
/// `results` empty outside `ok` and `error_detail` present only in `error`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchState {
    phase: SearchPhase,
    results: Vec<GiftResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    criteria: Option<GiftCriteria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    generation: u64,
}

impl SearchState {
    /// State before any search has been issued.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A search is in flight; everything from the previous search is gone.
    pub fn loading(query: impl Into<String>, generation: u64) -> Self {
        Self {
            phase: SearchPhase::Loading,
            query: Some(query.into()),
            generation,
            ..Self::default()
        }
    }

    /// The service returned gifts (possibly none).
    pub fn settled_ok(
        query: impl Into<String>,
        generation: u64,
        results: Vec<GiftResult>,
        criteria: Option<GiftCriteria>,
    ) -> Self {
        Self {
            phase: SearchPhase::Ok,
            results,
            criteria,
            query: Some(query.into()),
            generation,
            ..Self::default()
        }
    }

    /// The search failed.
    pub fn settled_error(
        query: impl Into<String>,
        generation: u64,
        kind: FailureKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            phase: SearchPhase::Error,
            error_detail: Some(detail.into()),
            error_kind: Some(kind),
            query: Some(query.into()),
            generation,
            ..Self::default()
        }
    }

    /// The search failed without a structured response.
    pub fn transport_failure(query: impl Into<String>, generation: u64) -> Self {
        Self::settled_error(
            query,
            generation,
            FailureKind::Transport,
            TRANSPORT_FAILURE_DETAIL,
        )
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Gifts in server order; empty unless the phase is `ok`.
    pub fn results(&self) -> &[GiftResult] {
        &self.results
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn error_kind(&self) -> Option<FailureKind> {
        self.error_kind
    }

    pub fn criteria(&self) -> Option<&GiftCriteria> {
        self.criteria.as_ref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Sequence number of the search this state belongs to; 0 before any.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }
}
