//! NFT types

use crate::client::{FilePart, MultipartForm};
use crate::{NftGateError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A token held by an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nft {
    pub contract_address: String,
    pub token_id: String,
    pub chain_id: u64,
    #[serde(default)]
    pub owner_address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<NftMetadata>,
}

/// Token metadata document
///
/// Metadata is user-defined, so keys outside the well-known ones are kept in
/// `additional_fields` instead of being dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NftMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<NftAttribute>,
    #[serde(flatten)]
    pub additional_fields: BTreeMap<String, Value>,
}

/// One metadata trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: Value,
}

impl NftAttribute {
    /// Create an attribute
    pub fn new(trait_type: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Parameters for minting a token together with its image
#[derive(Debug, Clone, PartialEq)]
pub struct NftDeploy {
    pub collection_id: String,
    pub name: String,
    pub recipient_address: String,
    pub description: Option<String>,
    pub attributes: Vec<NftAttribute>,
}

impl NftDeploy {
    /// Create mint parameters
    pub fn new(
        collection_id: impl Into<String>,
        name: impl Into<String>,
        recipient_address: impl Into<String>,
    ) -> Self {
        Self {
            collection_id: collection_id.into(),
            name: name.into(),
            recipient_address: recipient_address.into(),
            description: None,
            attributes: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a metadata attribute
    pub fn with_attribute(mut self, attribute: NftAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Multipart form carrying these parameters and the image
    ///
    /// Multipart fields are flat strings, so nested values (the attribute
    /// list) are sent as JSON-encoded text.
    pub fn to_multipart(&self, image: FilePart) -> Result<MultipartForm> {
        let mut form = MultipartForm::new()
            .text("collection_id", self.collection_id.clone())
            .text("name", self.name.clone())
            .text("recipient_address", self.recipient_address.clone());

        if let Some(description) = &self.description {
            form = form.text("description", description.clone());
        }

        if !self.attributes.is_empty() {
            let attributes = serde_json::to_string(&self.attributes).map_err(|e| {
                NftGateError::invalid_request(format!("Failed to encode attributes: {}", e))
            })?;
            form = form.text("attributes", attributes);
        }

        Ok(form.file("image", image))
    }
}
