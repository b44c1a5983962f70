// This is my entry point for the SDK command-line tool
// I'm pulling in the codec, identity and RPC pieces I built in the library
use architect_sdk::{
    format_address, format_chain_address, node_id_to_string, private_key_to_string, ClientConfig,
    Command, Identifier, IdentifierKind, JsonRpcModule, NodeClient, Opt,
};
use clap::Parser;
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use log::{error, LevelFilter};
use std::process;

#[tokio::main]
async fn main() {
    // I initialize logging so I can see what the client is doing
    // Info level shows address changes and module registration without request noise
    env_logger::builder().filter_level(LevelFilter::Info).init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // I run the command and exit with code 1 if anything goes wrong
    if let Err(e) = run_command(opt.command).await {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle each CLI command
// Only the commands that need a node or the network table read the environment,
// so encoding and decoding keep working offline with a broken NODE_PORT
async fn run_command(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        // When I want to turn raw hex bytes into one of the identifier strings
        Command::Encode {
            kind,
            hex,
            network_id,
            chain,
        } => {
            let bytes = HEXLOWER_PERMISSIVE.decode(hex.as_bytes())?;
            let encoded = match kind {
                IdentifierKind::PrivateKey => private_key_to_string(&bytes),
                IdentifierKind::NodeId => node_id_to_string(&bytes),
                IdentifierKind::Address => {
                    // Addresses need the HRP, so I load the network table here
                    let config = ClientConfig::from_env()?;
                    let networks = config.load_network_table()?;
                    let hrp = networks.preferred_hrp(network_id.or(config.network_id));
                    match chain {
                        Some(chain) => format_chain_address(&chain, hrp, &bytes),
                        None => format_address(hrp, &bytes),
                    }
                }
            };
            println!("{encoded}");
        }
        // When I want to see the bytes behind an identifier string
        Command::Decode { identifier } => {
            // The prefix tells me which decoder to use, and the checksum is verified
            let parsed = Identifier::parse(&identifier)?;
            if let Identifier::Address {
                chain: Some(chain),
                hrp,
                ..
            } = &parsed
            {
                println!("chain: {chain}, hrp: {hrp}");
            }
            println!("{}: {}", parsed.kind(), HEXLOWER.encode(parsed.bytes()));
        }
        // When I want to know which HRP a network uses
        Command::Hrp { network_id } => {
            let config = ClientConfig::from_env()?;
            let networks = config.load_network_table()?;
            // Unknown network IDs fall back to the fallback HRP instead of failing
            println!("{}", networks.preferred_hrp(network_id.or(config.network_id)));
        }
        // When I want to call a JSON-RPC method on the node I configured
        Command::Call {
            method,
            params,
            endpoint,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)?;
            let config = ClientConfig::from_env()?;
            let client = NodeClient::from_config(&config)?;
            // I register a JSON-RPC module at the endpoint and send the call through it
            let module = client.register_module::<JsonRpcModule>("rpc", Some(&endpoint));
            let result = module.call_method(&method, params).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
