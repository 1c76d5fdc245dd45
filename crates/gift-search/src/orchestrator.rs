//! The search orchestrator: owns the lifecycle state of the current search.
//!
//! `search` moves the state to `loading` before it returns, then resolves the
//! request on the runtime. Every search is tagged with a generation number;
//! a result is applied only while its generation is still the latest issued,
//! so of two overlapping searches the one issued last always wins, whatever
//! order the responses arrive in. In-flight requests are never cancelled.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use gift_catalog::FindGiftsResponse;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::{FailureKind, GiftSearchClient, SearchConfig, SearchError, SearchState};

/// How a single search ended from the orchestrator's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The result became the current state.
    Applied,
    /// A newer search had been issued; the result was discarded.
    Superseded,
    /// The task never finished (runtime shut down underneath it).
    Abandoned,
}

/// Handle to one issued search. Dropping it does not cancel anything.
#[derive(Debug)]
pub struct SearchHandle {
    generation: u64,
    task: JoinHandle<Settlement>,
}

impl SearchHandle {
    /// Generation number assigned to this search.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait until this search's request has resolved.
    pub async fn settled(self) -> Settlement {
        match self.task.await {
            Ok(settlement) => settlement,
            Err(err) => {
                warn!(generation = self.generation, error = %err, "search task did not complete");
                Settlement::Abandoned
            }
        }
    }
}

/// Owns the search state and the single entry point that drives it.
///
/// Cloning is cheap; clones share the same state.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: GiftSearchClient,
    state: watch::Sender<SearchState>,
}

impl SearchOrchestrator {
    /// Create an orchestrator in the `idle` phase.
    pub fn new(client: GiftSearchClient) -> Self {
        let (state, _) = watch::channel(SearchState::idle());
        Self {
            inner: Arc::new(Inner { client, state }),
        }
    }

    /// Create an orchestrator talking to the configured service.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self::new(GiftSearchClient::from_config(config)?))
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.inner.state.borrow().clone()
    }

    /// Reactive binding: the receiver is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.state.subscribe()
    }

    /// Start a search for `query`.
    ///
    /// The state is `loading` when this returns. The request runs on the
    /// tokio runtime; its outcome is only observable through the state.
    /// Must be called from within a runtime.
    pub fn search(&self, query: impl Into<String>) -> SearchHandle {
        let query = query.into();
        let generation = self.inner.begin(&query);

        let inner = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { inner.resolve(generation, query).await });

        SearchHandle { generation, task }
    }

    /// Run a search to completion on the current task and return the state
    /// it left behind (a newer search may already have replaced it).
    pub async fn search_and_settle(&self, query: impl Into<String>) -> SearchState {
        let query = query.into();
        let generation = self.inner.begin(&query);
        self.inner.resolve(generation, query).await;
        self.state()
    }
}

impl Inner {
    fn begin(&self, query: &str) -> u64 {
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = state.generation() + 1;
            *state = SearchState::loading(query, generation);
        });
        info!(generation, query_len = query.len(), "search started");
        generation
    }

    async fn resolve(&self, generation: u64, query: String) -> Settlement {
        let outcome = AssertUnwindSafe(self.client.find_gifts(&query))
            .catch_unwind()
            .await;

        let next = match outcome {
            Ok(Ok(FindGiftsResponse::Success { gifts, criteria })) => {
                debug!(generation, gifts = gifts.len(), "search succeeded");
                SearchState::settled_ok(query, generation, gifts, criteria)
            }
            Ok(Ok(FindGiftsResponse::Failure { error })) => {
                info!(generation, error = %error, "gift service reported a failure");
                SearchState::settled_error(query, generation, FailureKind::Logical, error)
            }
            Ok(Err(err)) => {
                warn!(generation, error = %err, timeout = err.is_timeout(), "search request failed");
                SearchState::transport_failure(query, generation)
            }
            Err(_) => {
                error!(generation, "search request panicked");
                SearchState::transport_failure(query, generation)
            }
        };

        self.settle(next)
    }

    fn settle(&self, next: SearchState) -> Settlement {
        let generation = next.generation();
        let applied = self.state.send_if_modified(|state| {
            if state.generation() != generation {
                return false;
            }
            *state = next;
            true
        });

        if applied {
            Settlement::Applied
        } else {
            debug!(generation, "discarding result of a superseded search");
            Settlement::Superseded
        }
    }
}
