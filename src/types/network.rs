//! Supported blockchain networks

use serde::{Deserialize, Serialize};

/// A blockchain network the API can deploy to and index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// EVM chain id
    pub chain_id: u64,
    /// Network name, e.g. "polygon"
    pub name: String,
    /// Native currency symbol
    pub symbol: String,
    /// Whether this is a testnet
    #[serde(default)]
    pub is_testnet: bool,
    /// Block explorer base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
}

impl Network {
    /// Block explorer link for a transaction hash, if the network has an explorer
    pub fn transaction_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer_url
            .as_deref()
            .map(|base| format!("{}/tx/{}", base.trim_end_matches('/'), tx_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decode;
    use serde_json::json;

    #[test]
    fn test_decode_network() {
        let network = Network::decode(json!({
            "chain_id": 80002,
            "name": "polygon-amoy",
            "symbol": "POL",
            "is_testnet": true,
            "explorer_url": "https://amoy.polygonscan.com/"
        }))
        .unwrap();

        assert_eq!(network.chain_id, 80002);
        assert!(network.is_testnet);
        assert_eq!(
            network.transaction_url("0xabc").as_deref(),
            Some("https://amoy.polygonscan.com/tx/0xabc")
        );
    }

    #[test]
    fn test_network_without_explorer() {
        let network = Network::decode(json!({"chain_id": 1, "name": "ethereum", "symbol": "ETH"}))
            .unwrap();
        assert!(!network.is_testnet);
        assert!(network.transaction_url("0xabc").is_none());
    }
}
