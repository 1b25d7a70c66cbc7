//! NFTGate command line client
//!
//! Lists every NFT held by an address on one chain, printing one JSON object
//! per line.
//!
//! ```text
//! NFTGATE_API_KEY=... nftgate 0x857b06519E91e3A54538791bDbb0E22373e36b66 137
//! ```
//!
//! ## Environment
//!
//! - `NFTGATE_API_KEY` (required)
//! - `NFTGATE_BASE_URL`
//! - `NFTGATE_TIMEOUT_SECS`, `NFTGATE_CONNECT_TIMEOUT_SECS`

use nftgate::{ClientConfig, NftGateClient, NftGateError};
use std::env;

const USAGE: &str = "usage: nftgate <address> <chain_id>";

/// Parse `<address> <chain_id>` from the process arguments
fn parse_args(args: &[String]) -> nftgate::Result<(String, u64)> {
    match args {
        [address, chain_id] => {
            let chain_id = chain_id.parse::<u64>().map_err(|_| {
                NftGateError::invalid_request(format!("Invalid chain id: {}", chain_id))
            })?;
            Ok((address.clone(), chain_id))
        }
        _ => Err(NftGateError::invalid_request(USAGE)),
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (address, chain_id) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let client = NftGateClient::new(ClientConfig::from_env()?)?;
    tracing::info!(%address, chain_id, "Listing NFTs");

    let mut nfts = client.nfts().paginate_by_address(address, chain_id);
    while nfts.has_next().await? {
        let nft = nfts.next_item().await?;
        println!("{}", serde_json::to_string(&nft)?);
    }

    tracing::info!(count = nfts.consumed(), "Done");
    Ok(())
}
