//! RPC dispatch middleware
//!
//! A [`NodeClient`] owns the connection descriptor, a registry of API
//! modules and a uniform request executor. Modules receive a cloned
//! [`Dispatcher`] when they are registered. HTTP itself sits behind the
//! [`Transport`] trait.

pub mod jsonrpc;
pub mod middleware;
pub mod registry;
pub mod transport;

pub use jsonrpc::{JsonRpcError, JsonRpcModule};
pub use middleware::{ConnectionDescriptor, Dispatcher, NodeClient, RequestResponse};
pub use registry::{ApiModule, ApiRegistry};
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};
