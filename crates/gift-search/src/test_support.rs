//! Fake transports shared by the unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gift_data::{FetchError, HttpTransport, Request, Response};
use serde_json::{json, Value};
use tokio::sync::oneshot;

type Reply = Result<Response, FetchError>;

pub fn ok_body(gifts: Value) -> Response {
    Response::json_body(
        200,
        json!({"success": true, "gifts": gifts}).to_string(),
    )
}

pub fn failure_body(status: u16, error: &str) -> Response {
    Response::json_body(
        status,
        json!({"success": false, "error": error}).to_string(),
    )
}

fn description_of(request: &Request) -> String {
    request
        .body
        .as_deref()
        .and_then(|body| serde_json::from_slice::<Value>(body).ok())
        .and_then(|value| value["description"].as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Answers every request with the same reply and records what it was sent.
pub struct ScriptedTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl ScriptedTransport {
    pub fn replying(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<Request>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

/// Holds each request open until the test releases it, keyed by the query.
pub struct GatedTransport {
    pending: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
}

pub struct Gates {
    senders: Mutex<HashMap<String, oneshot::Sender<Reply>>>,
}

impl GatedTransport {
    pub fn new(queries: &[&str]) -> (Self, Gates) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for query in queries {
            let (tx, rx) = oneshot::channel();
            senders.insert(query.to_string(), tx);
            pending.insert(query.to_string(), rx);
        }
        (
            Self {
                pending: Mutex::new(pending),
            },
            Gates {
                senders: Mutex::new(senders),
            },
        )
    }
}

#[async_trait]
impl HttpTransport for GatedTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let query = description_of(&request);
        let gate = self.pending.lock().unwrap().remove(&query);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchError::Connection("gate dropped".to_string()))),
            None => Err(FetchError::Connection(format!("no gate for {query:?}"))),
        }
    }
}

impl Gates {
    pub fn release(&self, query: &str, reply: Reply) {
        let tx = self
            .senders
            .lock()
            .unwrap()
            .remove(query)
            .unwrap_or_else(|| panic!("gate for {query:?} already released"));
        let _ = tx.send(reply);
    }
}

pub struct PanickingTransport;

#[async_trait]
impl HttpTransport for PanickingTransport {
    async fn send(&self, _request: Request) -> Result<Response, FetchError> {
        panic!("transport exploded");
    }
}
