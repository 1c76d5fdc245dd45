//! Client-side orchestration of gift searches.
//!
//! [`SearchOrchestrator`] accepts a free-text query, calls the find-gifts
//! service through [`GiftSearchClient`], and publishes the outcome as a
//! [`SearchState`] that views subscribe to.
//!
//! ```rust,ignore
//! use gift_search::{SearchConfig, SearchOrchestrator, SearchPhase};
//!
//! let orchestrator = SearchOrchestrator::from_config(&SearchConfig::default())?;
//! let state = orchestrator.search_and_settle("gift for mum who likes gardening").await;
//! if state.phase() == SearchPhase::Ok {
//!     for gift in state.results() {
//!         println!("{}", gift.name);
//!     }
//! }
//! ```

mod client;
mod config;
mod error;
mod orchestrator;
mod state;

#[cfg(test)]
mod test_support;

pub use client::GiftSearchClient;
pub use config::{SearchConfig, DEFAULT_BASE_URL};
pub use error::SearchError;
pub use orchestrator::{SearchHandle, SearchOrchestrator, Settlement};
pub use state::{FailureKind, SearchPhase, SearchState, TRANSPORT_FAILURE_DETAIL};
