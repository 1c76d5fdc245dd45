//! Catalog error types.

use thiserror::Error;

/// Errors raised while validating data received from the gift service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The response envelope did not match the find-gifts contract.
    #[error("Malformed find-gifts response: {0}")]
    MalformedResponse(String),
}
