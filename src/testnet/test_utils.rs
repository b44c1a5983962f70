//! Test utilities for dispatcher testing

use crate::config::DEFAULT_NETWORKS;
use crate::error::{Result, SdkError};
use crate::rpc::{NodeClient, Transport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Transport that records every request and answers from a canned reply
pub struct StubTransport {
    reply: Mutex<Result<TransportResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn replying(status: u16, body: Value) -> Self {
        Self {
            reply: Mutex::new(Ok(TransportResponse {
                body,
                headers: BTreeMap::from([(
                    "content-type".to_string(),
                    "application/json".to_string(),
                )]),
                status,
                status_text: "OK".to_string(),
            })),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing(error: SdkError) -> Self {
        Self {
            reply: Mutex::new(Err(error)),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn set_reply(&self, reply: Result<TransportResponse>) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.lock().unwrap().clone()
    }
}

/// Client on 127.0.0.1:9650 over a stub answering 200 `"ok"`
pub fn test_client() -> (NodeClient, Arc<StubTransport>) {
    let transport = Arc::new(StubTransport::replying(200, Value::String("ok".into())));
    let client = NodeClient::new(
        "127.0.0.1",
        9650,
        None,
        None,
        Arc::clone(&DEFAULT_NETWORKS),
        transport.clone(),
    );
    (client, transport)
}
