//! Outbound HTTP client utilities for the gift finder.
//!
//! Requests are assembled with a builder, then handed to an [`HttpTransport`].
//! Production code uses [`ReqwestTransport`]; tests plug in scripted fakes.
//!
//! # Example
//!
//! ```rust,ignore
//! use gift_data::{FetchClient, ReqwestTransport};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct FindGifts<'a> {
//!     description: &'a str,
//! }
//!
//! let client = FetchClient::new(ReqwestTransport::new())
//!     .with_base_url("http://localhost:5000");
//!
//! let response = client
//!     .post("/api/find-gifts")
//!     .json(&FindGifts { description: "gift for mum" })?
//!     .send()
//!     .await?;
//! ```

mod error;
mod request;
mod response;
mod transport;

use std::sync::Arc;

pub use error::FetchError;
pub use request::{Method, Request, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, ReqwestTransport};

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Option<String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a new HTTP client over the given transport.
    pub fn new(transport: impl HttpTransport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Post, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let full_url = self.resolve_url(url.into());

        ClientRequestBuilder {
            client: self,
            builder: RequestBuilder::new(method, full_url),
        }
    }

    /// Join a path onto the base URL. Absolute URLs pass through untouched.
    pub fn resolve_url(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                let base = base.trim_end_matches('/');
                if url.starts_with('/') {
                    format!("{}{}", base, url)
                } else {
                    format!("{}/{}", base, url)
                }
            }
            _ => url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    builder: RequestBuilder,
}

impl ClientRequestBuilder<'_> {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        let request = self.builder.build();
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let response = self.client.transport.send(request).await?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "response received");

        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpTransport, Method, Request, Response};
}
