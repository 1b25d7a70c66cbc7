//! Core types for the NFTGate API
//!
//! This module defines the client configuration, the page descriptor used by
//! every list endpoint, and the typed records each resource decodes into.
//!
//! # Architecture
//!
//! The types module is organized as follows:
//! - [`config`] - Client configuration (endpoint, credential, timeouts)
//! - [`constants`] - Default endpoints, environment variable names, media types
//! - [`page`] - Page descriptor and its wire layout
//! - [`collection`], [`nft`], [`payment`], [`webhook`], [`network`], [`user`], [`file`] -
//!   Resource records
//!
//! # Examples
//!
//! ## Client Configuration
//!
//! ```
//! use nftgate::types::ClientConfig;
//! use std::time::Duration;
//!
//! # fn example() -> nftgate::Result<()> {
//! let config = ClientConfig::new("my-api-key")
//!     .with_base_url("https://sandbox.nftgate.io")
//!     .with_timeout(Duration::from_secs(60));
//!
//! config.validate()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Decoding a Page
//!
//! ```
//! use nftgate::types::{Page, Payment};
//! use serde_json::json;
//!
//! # fn example() -> nftgate::Result<()> {
//! let page = Page::<Payment>::decode(json!({
//!     "data": [{"id": "pay_1", "amount": "5.00", "currency": "USD", "status": "paid"}],
//!     "next_cursor": null,
//!     "has_more": false
//! }))?;
//! assert_eq!(page.items.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod collection;
pub mod config;
pub mod constants;
pub mod file;
pub mod network;
pub mod nft;
pub mod page;
pub mod payment;
pub mod user;
pub mod webhook;

// Re-export commonly used types
pub use collection::{Collection, CollectionStatus, NewCollection};
pub use config::ClientConfig;
pub use constants::{endpoints, env_vars, media_types};
pub use file::UploadedFile;
pub use network::Network;
pub use nft::{Nft, NftAttribute, NftDeploy, NftMetadata};
pub use page::{Page, PageLayout};
pub use payment::{Payment, PaymentStatus};
pub use user::User;
pub use webhook::{NewWebhook, Webhook};
