//! The find-gifts request/response contract.
//!
//! Responses are validated here, at the boundary, into a tagged union so
//! nothing downstream ever inspects an untyped envelope.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::criteria::GiftCriteria;
use crate::error::CatalogError;
use crate::gift::GiftResult;

/// Path of the search endpoint, relative to the service base URL.
pub const FIND_GIFTS_PATH: &str = "/api/find-gifts";

/// Message used when the service reports failure without saying why.
pub const UNSPECIFIED_FAILURE: &str = "The gift service could not complete the search.";

/// Request body: `{"description": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindGiftsRequest {
    pub description: String,
}

impl FindGiftsRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A validated find-gifts response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Envelope")]
pub enum FindGiftsResponse {
    /// `success: true`; gifts in server order.
    Success {
        gifts: Vec<GiftResult>,
        criteria: Option<GiftCriteria>,
    },
    /// `success: false`; the service's own message.
    Failure { error: String },
}

impl FindGiftsResponse {
    /// Parse and validate a raw response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, CatalogError> {
        serde_json::from_slice(body).map_err(|e| CatalogError::MalformedResponse(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FindGiftsResponse::Success { .. })
    }
}

/// Untyped wire shape, only used as the input of validation.
#[derive(Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    gifts: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    criteria: Option<serde_json::Value>,
}

impl TryFrom<Envelope> for FindGiftsResponse {
    type Error = CatalogError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        if envelope.success {
            let gifts = envelope.gifts.ok_or_else(|| {
                CatalogError::MalformedResponse("success response without `gifts`".to_string())
            })?;
            Ok(FindGiftsResponse::Success {
                gifts: decode_gifts(gifts),
                criteria: envelope.criteria.and_then(GiftCriteria::from_value),
            })
        } else {
            let error = envelope
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string());
            Ok(FindGiftsResponse::Failure { error })
        }
    }
}

/// Decode each record on its own; a record that cannot be read is skipped.
fn decode_gifts(raw: Vec<serde_json::Value>) -> Vec<GiftResult> {
    let total = raw.len();
    let gifts: Vec<GiftResult> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(gift) => Some(gift),
            Err(e) => {
                warn!(index, error = %e, "skipping unreadable gift record");
                None
            }
        })
        .collect();

    if gifts.len() < total {
        warn!(kept = gifts.len(), total, "some gift records were skipped");
    }
    gifts
}
