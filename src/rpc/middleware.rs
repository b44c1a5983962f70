use crate::config::{ClientConfig, NetworkTable};
use crate::error::Result;
use crate::rpc::registry::{ApiModule, ApiRegistry};
use crate::rpc::transport::{HttpTransport, Method, Transport, TransportRequest};
use log::{debug, info};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

pub const DEFAULT_PROTOCOL: &str = "http";

/// Protocol, host and port of a node together with the derived base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    protocol: String,
    host: String,
    port: u16,
    url: String,
}

impl ConnectionDescriptor {
    pub fn new(host: &str, port: u16, protocol: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            host: host.to_string(),
            port,
            url: format!("{protocol}://{host}:{port}"),
        }
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Normalized result of every call made through the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct RequestResponse {
    pub data: Value,
    pub headers: BTreeMap<String, String>,
    /// The request as it was handed to the transport
    pub request: TransportRequest,
    pub status: u16,
    pub status_text: String,
}

#[derive(Debug, Clone)]
struct NetworkSelection {
    network_id: u32,
    hrp: String,
}

struct DispatcherInner {
    connection: RwLock<ConnectionDescriptor>,
    network: RwLock<NetworkSelection>,
    headers: RwLock<BTreeMap<String, String>>,
    networks: Arc<NetworkTable>,
    transport: Arc<dyn Transport>,
}

/// Connection identity plus a uniform request executor.
///
/// Cheap to clone; every clone shares one connection descriptor, so API
/// modules holding a clone observe `set_address` on any other. No per-call
/// state is kept, concurrent calls need no coordination.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

impl Dispatcher {
    pub fn new(
        connection: ConnectionDescriptor,
        network_id: Option<u32>,
        networks: Arc<NetworkTable>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let network_id = network_id.unwrap_or_else(|| networks.default_network_id());
        let hrp = networks.preferred_hrp(Some(network_id)).to_string();
        Self {
            inner: Arc::new(DispatcherInner {
                connection: RwLock::new(connection),
                network: RwLock::new(NetworkSelection { network_id, hrp }),
                headers: RwLock::new(BTreeMap::new()),
                networks,
                transport,
            }),
        }
    }

    /// Replace host, port and protocol in one step; `None` means http.
    pub fn set_address(&self, host: &str, port: u16, protocol: Option<&str>) {
        let descriptor =
            ConnectionDescriptor::new(host, port, protocol.unwrap_or(DEFAULT_PROTOCOL));
        info!("Node address set to {}", descriptor.url());
        *self
            .inner
            .connection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = descriptor;
    }

    /// Consistent snapshot of the connection descriptor
    pub fn connection(&self) -> ConnectionDescriptor {
        self.inner
            .connection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn url(&self) -> String {
        self.connection().url
    }

    pub fn host(&self) -> String {
        self.connection().host
    }

    pub fn port(&self) -> u16 {
        self.connection().port
    }

    pub fn protocol(&self) -> String {
        self.connection().protocol
    }

    pub fn networks(&self) -> &Arc<NetworkTable> {
        &self.inner.networks
    }

    pub fn network_id(&self) -> u32 {
        self.network_selection().network_id
    }

    pub fn hrp(&self) -> String {
        self.network_selection().hrp
    }

    /// Switch networks; the HRP follows the table's preferred HRP.
    pub fn set_network_id(&self, network_id: u32) {
        let hrp = self.inner.networks.preferred_hrp(Some(network_id)).to_string();
        debug!("Network ID set to {network_id} (hrp {hrp})");
        *self
            .inner
            .network
            .write()
            .unwrap_or_else(PoisonError::into_inner) = NetworkSelection { network_id, hrp };
    }

    pub fn set_hrp(&self, hrp: &str) {
        self.inner
            .network
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .hrp = hrp.to_string();
    }

    fn network_selection(&self) -> NetworkSelection {
        self.inner
            .network
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Header sent with every request unless overridden per call
    pub fn set_header(&self, name: &str, value: &str) {
        self.inner
            .headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove_header(&self, name: &str) {
        self.inner
            .headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    pub fn remove_all_headers(&self) {
        self.inner
            .headers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn set_auth_token(&self, token: &str) {
        self.set_header("Authorization", &format!("Bearer {token}"));
    }

    pub fn headers(&self) -> BTreeMap<String, String> {
        self.inner
            .headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Issue one call and normalize the outcome.
    ///
    /// `path` is resolved against the current base URL and `headers` are
    /// merged over the default headers. An `override_request` is sent as
    /// given. Transport errors are returned unchanged; nothing is retried.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
        headers: Option<&BTreeMap<String, String>>,
        override_request: Option<TransportRequest>,
    ) -> Result<RequestResponse> {
        let request = match override_request {
            Some(request) => request,
            None => {
                let mut merged = self.headers();
                if let Some(extra) = headers {
                    merged.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
                TransportRequest {
                    base_url: self.url(),
                    method,
                    path: path.to_string(),
                    headers: merged,
                    query: query.to_vec(),
                    body: if method.has_body() { body } else { None },
                }
            }
        };

        debug!("Dispatching {} {}", request.method, request.url());
        let response = self.inner.transport.execute(&request).await?;
        Ok(RequestResponse {
            data: response.body,
            headers: response.headers,
            request,
            status: response.status,
            status_text: response.status_text,
        })
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestResponse> {
        self.request(Method::Get, path, query, None, headers, None)
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        query: &[(String, String)],
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestResponse> {
        self.request(Method::Delete, path, query, None, headers, None)
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Value,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestResponse> {
        self.request(Method::Post, path, query, Some(body), headers, None)
            .await
    }

    pub async fn put(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Value,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestResponse> {
        self.request(Method::Put, path, query, Some(body), headers, None)
            .await
    }

    pub async fn patch(
        &self,
        path: &str,
        query: &[(String, String)],
        body: Value,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<RequestResponse> {
        self.request(Method::Patch, path, query, Some(body), headers, None)
            .await
    }
}

/// Client entry point: a dispatcher plus the registry of API modules built on it
pub struct NodeClient {
    dispatcher: Dispatcher,
    modules: ApiRegistry,
}

impl NodeClient {
    pub fn new(
        host: &str,
        port: u16,
        protocol: Option<&str>,
        network_id: Option<u32>,
        networks: Arc<NetworkTable>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let connection =
            ConnectionDescriptor::new(host, port, protocol.unwrap_or(DEFAULT_PROTOCOL));
        info!("Created node client for {}", connection.url());
        Self {
            dispatcher: Dispatcher::new(connection, network_id, networks, transport),
            modules: ApiRegistry::new(),
        }
    }

    /// Build an HTTP client from environment-derived settings
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let networks = config.load_network_table()?;
        Ok(Self::new(
            &config.host,
            config.port,
            Some(&config.protocol),
            config.network_id,
            networks,
            Arc::new(HttpTransport::new()),
        ))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn set_address(&self, host: &str, port: u16, protocol: Option<&str>) {
        self.dispatcher.set_address(host, port, protocol);
    }

    pub fn url(&self) -> String {
        self.dispatcher.url()
    }

    pub fn host(&self) -> String {
        self.dispatcher.host()
    }

    pub fn port(&self) -> u16 {
        self.dispatcher.port()
    }

    pub fn protocol(&self) -> String {
        self.dispatcher.protocol()
    }

    pub fn network_id(&self) -> u32 {
        self.dispatcher.network_id()
    }

    pub fn hrp(&self) -> String {
        self.dispatcher.hrp()
    }

    /// Construct `M` through its [`ApiModule::new`] and store it under `label`
    pub fn register_module<M: ApiModule>(&self, label: &str, base_path: Option<&str>) -> Arc<M> {
        self.register_module_with(label, M::new, base_path)
    }

    /// Construct a module with `factory` and store it under `label`,
    /// replacing any module already stored there.
    pub fn register_module_with<M, F>(
        &self,
        label: &str,
        factory: F,
        base_path: Option<&str>,
    ) -> Arc<M>
    where
        M: ApiModule,
        F: FnOnce(Dispatcher, Option<&str>) -> M,
    {
        let module = Arc::new(factory(self.dispatcher.clone(), base_path));
        self.modules.insert(label, Arc::clone(&module));
        module
    }

    /// The module under `label`, if one exists and it is an `M`
    pub fn module<M: ApiModule>(&self, label: &str) -> Option<Arc<M>> {
        self.modules.get::<M>(label)
    }

    pub fn module_labels(&self) -> Vec<String> {
        self.modules.labels()
    }
}
