//! Uploaded file types

use serde::{Deserialize, Serialize};

/// A file stored by the API, usable as NFT media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    /// Public URL of the stored file
    pub url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
}
