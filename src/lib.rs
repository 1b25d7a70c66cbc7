//! # NFTGate Rust SDK
//!
//! An async, **type-safe** client for the NFTGate REST API: collections, NFT
//! minting, payments, webhooks and file uploads.
//!
//! ## Features
//!
//! - **One request pipeline**: every endpoint goes through
//!   [`NftGateClient::execute`], which builds the URL, attaches the bearer
//!   credential and classifies the response
//! - **Three body encodings**: JSON, form-urlencoded and `multipart/form-data`
//! - **Lazy pagination**: list endpoints return a [`Paginator`] that fetches
//!   pages only as items are consumed
//! - **Typed errors**: server, validation, client and transport failures are
//!   distinct [`NftGateError`] variants
//! - **Pluggable transport**: swap `reqwest` for any [`client::HttpTransport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nftgate::{ClientConfig, NftGateClient};
//!
//! #[tokio::main]
//! async fn main() -> nftgate::Result<()> {
//!     let client = NftGateClient::new(ClientConfig::new("my-api-key"))?;
//!
//!     let me = client.users().me().await?;
//!     println!("Signed in as {}", me.name);
//!
//!     let mut nfts = client
//!         .nfts()
//!         .paginate_by_address("0x857b06519E91e3A54538791bDbb0E22373e36b66", 137);
//!     for nft in nfts.collect_all().await? {
//!         println!("{} #{}", nft.contract_address, nft.token_id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`client`**: Request pipeline and HTTP transport
//! - **`pagination`**: Lazy cursor-based paginator
//! - **`resources`**: Typed endpoint handles
//! - **`types`**: Configuration, page descriptor and resource records
//! - **`decode`**: JSON to typed record decoding
//! - **`error`**: Error kinds

pub mod client;
pub mod decode;
pub mod error;
pub mod pagination;
pub mod resources;
pub mod types;

// Re-exports for convenience
pub use client::NftGateClient;
pub use decode::Decode;
pub use error::{NftGateError, Result};
pub use pagination::{FetchPage, Paginator, PaginatorState};
pub use types::{ClientConfig, Page};

/// Current version of the SDK
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
        assert!(types::endpoints::DEFAULT_USER_AGENT.ends_with(VERSION));
    }

    #[test]
    fn test_client_from_config() {
        let client = NftGateClient::new(ClientConfig::new("key")).unwrap();
        assert_eq!(client.config().base_url, types::endpoints::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let err = NftGateClient::new(ClientConfig::new("key").with_base_url("ftp://nope")).unwrap_err();
        assert!(matches!(err, NftGateError::Config(_)));
    }
}
