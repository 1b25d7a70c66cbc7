//! Collection types

use crate::decode::deserialize_discriminator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An NFT collection (one deployed contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    pub chain_id: u64,
    /// Contract address, once deployed
    #[serde(default)]
    pub contract_address: Option<String>,
    pub owner_address: String,
    pub status: CollectionStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Deployment status of a collection contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionStatus {
    Pending,
    Deploying,
    Deployed,
    Failed,
}

impl CollectionStatus {
    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Pending => "PENDING",
            CollectionStatus::Deploying => "DEPLOYING",
            CollectionStatus::Deployed => "DEPLOYED",
            CollectionStatus::Failed => "FAILED",
        }
    }
}

impl FromStr for CollectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(CollectionStatus::Pending),
            "DEPLOYING" => Ok(CollectionStatus::Deploying),
            "DEPLOYED" => Ok(CollectionStatus::Deployed),
            "FAILED" => Ok(CollectionStatus::Failed),
            other => Err(format!("unknown collection status `{}`", other)),
        }
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CollectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CollectionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_discriminator(deserializer)
    }
}

/// Parameters for creating a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCollection {
    pub name: String,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCollection {
    /// Create collection parameters
    pub fn new(name: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            chain_id,
            symbol: None,
            description: None,
        }
    }

    /// Set the token symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::Decode;
    use crate::NftGateError;
    use serde_json::json;

    #[test]
    fn test_decode_collection() {
        let collection = Collection::decode(json!({
            "id": "col_1",
            "name": "Genesis",
            "chain_id": 137,
            "owner_address": "0xowner",
            "status": "Deployed",
            "contract_address": "0xcontract"
        }))
        .unwrap();

        assert_eq!(collection.status, CollectionStatus::Deployed);
        assert_eq!(collection.contract_address.as_deref(), Some("0xcontract"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let err = Collection::decode(json!({
            "id": "col_1",
            "name": "Genesis",
            "chain_id": 137,
            "owner_address": "0xowner",
            "status": "archived"
        }))
        .unwrap_err();
        assert!(matches!(err, NftGateError::Decoding(_)));
    }

    #[test]
    fn test_new_collection_skips_absent_fields() {
        let body = serde_json::to_value(NewCollection::new("Genesis", 137).with_symbol("GEN")).unwrap();
        assert_eq!(body, json!({"name": "Genesis", "chain_id": 137, "symbol": "GEN"}));
    }
}
