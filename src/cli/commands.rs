use crate::identity::IdentifierKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "architect-sdk")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encode", about = "Encode hex bytes as an identifier string")]
    Encode {
        #[arg(help = "Identifier kind (private-key, node-id, address)")]
        kind: IdentifierKind,
        #[arg(help = "Payload bytes as hex")]
        hex: String,
        #[arg(long = "network-id", help = "Network whose HRP prefixes addresses")]
        network_id: Option<u32>,
        #[arg(long = "chain", help = "Chain alias for addresses, e.g. X")]
        chain: Option<String>,
    },
    #[command(name = "decode", about = "Decode an identifier string to hex bytes")]
    Decode {
        #[arg(help = "PrivateKey-..., NodeID-... or an address")]
        identifier: String,
    },
    #[command(name = "hrp", about = "Print the human-readable prefix of a network")]
    Hrp {
        #[arg(help = "Network ID (defaults to the default network)")]
        network_id: Option<u32>,
    },
    #[command(name = "call", about = "Call a JSON-RPC method on the configured node")]
    Call {
        #[arg(help = "Method name, e.g. info.getNetworkID")]
        method: String,
        #[arg(help = "JSON params", default_value = "{}")]
        params: String,
        #[arg(long = "endpoint", help = "Endpoint path", default_value = "/ext/info")]
        endpoint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encode() {
        let opt = Opt::try_parse_from([
            "architect-sdk",
            "encode",
            "address",
            "00ff",
            "--network-id",
            "5",
        ])
        .unwrap();
        match opt.command {
            Command::Encode {
                kind, network_id, ..
            } => {
                assert_eq!(kind, IdentifierKind::Address);
                assert_eq!(network_id, Some(5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_call_defaults() {
        let opt = Opt::try_parse_from(["architect-sdk", "call", "info.getNodeID"]).unwrap();
        match opt.command {
            Command::Call {
                params, endpoint, ..
            } => {
                assert_eq!(params, "{}");
                assert_eq!(endpoint, "/ext/info");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_kind_rejected() {
        assert!(Opt::try_parse_from(["architect-sdk", "encode", "wallet", "00"]).is_err());
    }
}
