use crate::error::{Result, SdkError};
use crate::rpc::middleware::Dispatcher;
use crate::rpc::registry::ApiModule;
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Endpoint used when no base path is given
pub const DEFAULT_ENDPOINT: &str = "/ext/info";
const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// JSON-RPC 2.0 request
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

/// JSON-RPC 2.0 response
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    // `Some(Value::Null)` for `"result": null`, `None` only when the key is absent
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC error
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<Value>,
}

/// API module speaking JSON-RPC 2.0 at a single endpoint
pub struct JsonRpcModule {
    dispatcher: Dispatcher,
    base_path: String,
    next_id: AtomicU64,
}

impl ApiModule for JsonRpcModule {
    fn new(dispatcher: Dispatcher, base_path: Option<&str>) -> Self {
        Self {
            dispatcher,
            base_path: base_path.unwrap_or(DEFAULT_ENDPOINT).to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl JsonRpcModule {
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// POST `method` with `params` and return the `result` member
    pub async fn call_method(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let envelope = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        let headers = BTreeMap::from([("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())]);

        debug!("JSON-RPC #{id} {method} -> {}", self.base_path);
        let response = self
            .dispatcher
            .post(
                &self.base_path,
                &[],
                serde_json::to_value(&envelope)?,
                Some(&headers),
            )
            .await?;

        let reply: JsonRpcResponse = serde_json::from_value(response.data)?;
        if let Some(error) = reply.error {
            return Err(SdkError::JsonRpc {
                code: error.code,
                message: error.message,
            });
        }
        reply
            .result
            .ok_or_else(|| SdkError::Serialization(format!("missing result for {method}")))
    }

    /// [`call_method`](Self::call_method) with the result decoded into `T`
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let result = self.call_method(method, params).await?;
        Ok(serde_json::from_value(result)?)
    }
}
