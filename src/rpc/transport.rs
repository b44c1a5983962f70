use crate::error::{Result, SdkError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP-style request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Whether requests with this method carry a body
    pub fn has_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Delete)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Put => write!(f, "PUT"),
            Method::Patch => write!(f, "PATCH"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Everything a transport needs to perform one call
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub base_url: String,
    pub method: Method,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl TransportRequest {
    /// `path` resolved against `base_url`
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.path.is_empty() {
            base.to_string()
        } else if self.path.starts_with('/') {
            format!("{base}{}", self.path)
        } else {
            format!("{base}/{}", self.path)
        }
    }
}

/// What a transport hands back on success
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub body: Value,
    pub headers: BTreeMap<String, String>,
    pub status: u16,
    pub status_text: String,
}

/// Executes requests against a node. Implementations report network
/// failures and rejected statuses as `SdkError::Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport; non-2xx statuses are errors.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client, e.g. one with a timeout
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse> {
        let url = request.url();
        let mut builder = self.client.request(request.method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response.bytes().await?;

        if status.is_client_error() || status.is_server_error() {
            let message = String::from_utf8(bytes.to_vec()).unwrap_or("unparsable error".into());
            return Err(SdkError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        Ok(TransportResponse {
            body: decode_body(&bytes),
            headers,
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        })
    }
}

/// JSON when the body parses as JSON, otherwise the raw text
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
