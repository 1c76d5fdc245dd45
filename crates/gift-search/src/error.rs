//! Search error types.

use gift_catalog::CatalogError;
use gift_data::FetchError;
use thiserror::Error;

/// Reasons a search produced no structured response.
///
/// These never reach the caller of `search`; the orchestrator turns them into
/// a transport failure in the state and logs the cause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The request could not be sent or the service answered with an error
    /// status and no contract body.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A body arrived but did not follow the find-gifts contract.
    #[error(transparent)]
    Malformed(#[from] CatalogError),

    /// The configuration can never produce a request.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    /// Whether the transport gave up waiting.
    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Fetch(FetchError::Timeout))
    }
}
