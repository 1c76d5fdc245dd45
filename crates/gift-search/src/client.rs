//! Typed client for the find-gifts endpoint.

use gift_catalog::{FindGiftsRequest, FindGiftsResponse, FIND_GIFTS_PATH};
use gift_data::{FetchClient, HttpTransport, ReqwestTransport};
use tracing::debug;

use crate::{SearchConfig, SearchError};

/// Issues find-gifts requests and validates what comes back.
#[derive(Debug, Clone)]
pub struct GiftSearchClient {
    fetch: FetchClient,
}

impl GiftSearchClient {
    /// Wrap a fetch client that already carries the service base URL.
    pub fn new(fetch: FetchClient) -> Self {
        Self { fetch }
    }

    /// Build a reqwest-backed client from configuration.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let transport = match config.timeout() {
            Some(timeout) => ReqwestTransport::with_timeout(timeout)?,
            None => ReqwestTransport::new(),
        };
        Ok(Self::with_transport(config, transport))
    }

    /// Build a client over any transport.
    pub fn with_transport(config: &SearchConfig, transport: impl HttpTransport + 'static) -> Self {
        Self::new(FetchClient::new(transport).with_base_url(config.base_url.clone()))
    }

    /// POST the query and return the validated response.
    ///
    /// The service answers validation and internal errors with a 4xx/5xx
    /// status *and* a `{"success": false, ...}` body. Any status whose body
    /// follows the contract is therefore a structured response; only bodies
    /// that do not parse are errors.
    #[tracing::instrument(name = "find_gifts", skip(self, query), fields(query_len = query.len()))]
    pub async fn find_gifts(&self, query: &str) -> Result<FindGiftsResponse, SearchError> {
        let response = self
            .fetch
            .post(FIND_GIFTS_PATH)
            .accept("application/json")
            .json(&FindGiftsRequest::new(query))?
            .send()
            .await?;

        match FindGiftsResponse::from_slice(&response.body) {
            Ok(parsed) => {
                if !response.is_success() {
                    debug!(status = response.status, "error status with a contract body");
                }
                Ok(parsed)
            }
            Err(malformed) => {
                debug!(
                    status = response.status,
                    content_type = response.header("Content-Type"),
                    "body does not follow the find-gifts contract"
                );
                match response.error_for_status() {
                    Err(status) => Err(status.into()),
                    Ok(_) => Err(malformed.into()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failure_body, ok_body, ScriptedTransport};
    use gift_data::{FetchError, Method, Response};
    use serde_json::json;

    fn client_with(transport: ScriptedTransport) -> GiftSearchClient {
        GiftSearchClient::with_transport(&SearchConfig::new("http://gifts.test"), transport)
    }

    #[tokio::test]
    async fn test_request_shape() {
        let transport = ScriptedTransport::replying(Ok(ok_body(json!([]))));
        let seen = transport.requests();
        let client = client_with(transport);

        client.find_gifts("gift for mum").await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].url, "http://gifts.test/api/find-gifts");
        assert_eq!(seen[0].header("Content-Type"), Some("application/json"));
        assert_eq!(seen[0].body_text(), Some(r#"{"description":"gift for mum"}"#));
    }

    #[tokio::test]
    async fn test_success_response() {
        let client = client_with(ScriptedTransport::replying(Ok(ok_body(json!([
            {"id": 1, "name": "Mug", "price": 9.5}
        ])))));

        let response = client.find_gifts("mug").await.unwrap();
        let FindGiftsResponse::Success { gifts, .. } = response else {
            panic!("expected success");
        };
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].name, "Mug");
    }

    #[tokio::test]
    async fn test_error_status_with_contract_body_is_structured() {
        let client = client_with(ScriptedTransport::replying(Ok(failure_body(
            400,
            "Description is required",
        ))));

        let response = client.find_gifts("").await.unwrap();
        assert_eq!(
            response,
            FindGiftsResponse::Failure {
                error: "Description is required".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_without_contract_body() {
        let client = client_with(ScriptedTransport::replying(Ok(Response::new(
            502,
            Default::default(),
            b"<html>Bad Gateway</html>".to_vec(),
        ))));

        let err = client.find_gifts("mug").await.unwrap_err();
        assert!(matches!(err, SearchError::Fetch(FetchError::HttpError { status: 502, .. })));
    }

    #[tokio::test]
    async fn test_ok_status_with_garbage_body() {
        let client = client_with(ScriptedTransport::replying(Ok(Response::json_body(
            200,
            r#"{"gifts": "soon"}"#,
        ))));

        let err = client.find_gifts("mug").await.unwrap_err();
        assert!(matches!(err, SearchError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let client = client_with(ScriptedTransport::replying(Err(FetchError::Timeout)));
        let err = client.find_gifts("mug").await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn test_from_config_validates() {
        assert!(GiftSearchClient::from_config(&SearchConfig::new("gifts.test")).is_err());
        assert!(GiftSearchClient::from_config(&SearchConfig::default()).is_ok());
    }
}
