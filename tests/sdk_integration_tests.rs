//! SDK integration tests
//!
//! Exercises the public surface end to end: identifier strings over the
//! cb58 codec, network-table lookups, fee accounting and a registered API
//! module dispatching through a stub transport.

use architect_sdk::{
    cb58_decode, cb58_encode, checksum, cost_of_transaction, format_address, node_id_from_string,
    node_id_to_string, parse_address, preferred_hrp, private_key_from_string,
    private_key_to_string, ApiModule, CostAccountant, Dispatcher, Identifier, ImportTx, InputCost,
    NetworkTable, NodeClient, RequestResponse, Result, SdkError, SecpInput, Transport,
    TransportRequest, TransportResponse, DEFAULT_NETWORKS, FALLBACK_HRP,
};
use async_trait::async_trait;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

struct FixedTransport {
    status: u16,
    body: Value,
    seen: Mutex<Vec<TransportRequest>>,
}

impl FixedTransport {
    fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            seen: Mutex::new(vec![]),
        }
    }
}

#[async_trait]
impl Transport for FixedTransport {
    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(TransportResponse {
            body: self.body.clone(),
            headers: BTreeMap::new(),
            status: self.status,
            status_text: "OK".to_string(),
        })
    }
}

/// Module whose info endpoint lives under `/ext/<label>/info`
struct LabelledApi {
    dispatcher: Dispatcher,
    base_path: String,
}

impl ApiModule for LabelledApi {
    fn new(dispatcher: Dispatcher, base_path: Option<&str>) -> Self {
        Self {
            dispatcher,
            base_path: base_path.unwrap_or("/ext").to_string(),
        }
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl LabelledApi {
    async fn info(&self) -> Result<RequestResponse> {
        let path = format!("{}/info", self.base_path);
        self.dispatcher.get(&path, &[], None).await
    }
}

#[tokio::test]
async fn test_registered_module_dispatches_get() {
    let transport = Arc::new(FixedTransport::new(200, json!("ok")));
    let client = NodeClient::new(
        "127.0.0.1",
        9650,
        Some("http"),
        None,
        Arc::clone(&DEFAULT_NETWORKS),
        transport.clone(),
    );
    client.register_module::<LabelledApi>("X", Some("/ext/X"));

    let module = client.module::<LabelledApi>("X").unwrap();
    let response = module.info().await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!("ok"));

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url(), "http://127.0.0.1:9650/ext/X/info");
    assert!(seen[0].query.is_empty());
    assert_eq!(seen[0].body, None);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let transport = Arc::new(FixedTransport::new(200, json!({"ok": true})));
    let client = Arc::new(NodeClient::new(
        "127.0.0.1",
        9650,
        None,
        Some(5),
        Arc::clone(&DEFAULT_NETWORKS),
        transport.clone(),
    ));

    let mut handles = Vec::new();
    for i in 0..8 {
        let dispatcher = client.dispatcher().clone();
        handles.push(tokio::spawn(async move {
            let path = format!("/ext/{i}");
            dispatcher.get(&path, &[], None).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().status, 200);
    }
    assert_eq!(transport.seen.lock().unwrap().len(), 8);
}

#[test]
fn test_unknown_label_is_absent() {
    let client = NodeClient::new(
        "127.0.0.1",
        9650,
        None,
        None,
        Arc::clone(&DEFAULT_NETWORKS),
        Arc::new(FixedTransport::new(200, Value::Null)),
    );
    assert!(client.module::<LabelledApi>("nope").is_none());
}

#[test]
fn test_private_key_prefix_enforced() {
    assert!(matches!(
        private_key_from_string("NotAPrefix-abc"),
        Err(SdkError::InvalidPrefix { ref expected, .. }) if expected == "PrivateKey-"
    ));
}

#[test]
fn test_hrp_resolution() {
    let table = NetworkTable::builtin();
    assert_eq!(
        preferred_hrp(&table, None),
        table.get(table.default_network_id()).unwrap().hrp
    );
    assert_eq!(preferred_hrp(&table, Some(99999)), FALLBACK_HRP);
}

#[test]
fn test_identifier_parse_round_trip() {
    for original in [
        private_key_to_string(&[0x5a; 32]),
        node_id_to_string(&[0x17; 20]),
        format_address("fuji", &[0x33; 20]),
        format!("X-{}", format_address("avax", &[0x01; 20])),
    ] {
        let parsed: Identifier = original.parse().unwrap();
        assert_eq!(parsed.to_string(), original);
    }
}

#[test]
fn test_network_table_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
default_network_id = 42
fallback_hrp = "other"

[[networks]]
network_id = 42
name = "Devnet"
hrp = "dev"
"#
    )
    .unwrap();

    let table = NetworkTable::from_file(file.path()).unwrap();
    assert_eq!(table.preferred_hrp(None), "dev");
    assert_eq!(table.preferred_hrp(Some(1)), "other");
}

#[test]
fn test_missing_network_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = NetworkTable::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(SdkError::Io(_))));
}

#[test]
fn test_import_cost_is_bytes_plus_inputs() {
    let mut tx = ImportTx::new(1, &[0; 32], &[1; 32]);
    for n in 1..=3 {
        let mut input = SecpInput::new(&[n; 32], 0, &[2; 32], 10);
        for index in 0..u32::from(n) {
            input.add_signature_index(index);
        }
        tx.add_input(input);
    }

    let accountant = CostAccountant::for_network(&DEFAULT_NETWORKS, None);
    let base = accountant.base_cost(&tx).unwrap();
    let inputs: u64 = tx.import_inputs().iter().map(|i| i.cost()).sum();

    let first = cost_of_transaction(&tx, &DEFAULT_NETWORKS, None).unwrap();
    let second = cost_of_transaction(&tx, &DEFAULT_NETWORKS, None).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, base + inputs);
    assert_eq!(inputs, 6000);
}

proptest! {
    #[test]
    fn prop_cb58_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..96)) {
        prop_assert_eq!(cb58_decode(&cb58_encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_single_bit_flip_rejected(
        bytes in proptest::collection::vec(any::<u8>(), 1..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut raw = bytes.clone();
        raw.extend_from_slice(&checksum(&bytes));
        raw[position.index(bytes.len())] ^= 1 << bit;
        let tampered = bs58::encode(&raw).into_string();
        prop_assert!(matches!(cb58_decode(&tampered), Err(SdkError::Checksum(_))));
    }

    #[test]
    fn prop_private_key_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let decoded = private_key_from_string(&private_key_to_string(&bytes)).unwrap();
        prop_assert_eq!(decoded.as_slice(), bytes.as_slice());
    }

    #[test]
    fn prop_node_id_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(node_id_from_string(&node_id_to_string(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_address_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
        let (hrp, decoded) = parse_address(&format_address("local", &bytes)).unwrap();
        prop_assert_eq!(hrp, "local");
        prop_assert_eq!(decoded, bytes);
    }
}
