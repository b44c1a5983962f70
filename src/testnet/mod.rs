//! Test utilities
//!
//! In-memory transport and client helpers shared by unit tests.

pub mod test_utils;

pub use test_utils::{test_client, StubTransport};
