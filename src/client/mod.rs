//! Request pipeline for the NFTGate API
//!
//! [`NftGateClient::execute`] turns a method, a resource path and
//! [`RequestOptions`] into a decoded JSON value or a classified
//! [`NftGateError`]. All resource endpoints and every paginated listing go
//! through it.
//!
//! # Architecture
//!
//! - [`request`] - Request options and body encodings (JSON, form, multipart)
//! - [`transport`] - The [`HttpTransport`] boundary and its `reqwest` implementation
//! - `response` - Classification of HTTP outcomes into error kinds
//!
//! # Examples
//!
//! ```no_run
//! use nftgate::client::{Method, RequestOptions};
//! use nftgate::{ClientConfig, NftGateClient};
//!
//! # async fn example() -> nftgate::Result<()> {
//! let client = NftGateClient::new(ClientConfig::new("my-api-key"))?;
//!
//! let body = client
//!     .execute(
//!         Method::GET,
//!         "/collections",
//!         RequestOptions::new().query("owner", "0x857b06519E91e3A54538791bDbb0E22373e36b66"),
//!     )
//!     .await?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```
//!
//! Cancelling a call is done by dropping its future; the connect and total
//! timeouts from [`ClientConfig`] apply to every request regardless.

use crate::decode::Decode;
use crate::resources::{Collections, Files, Networks, Nfts, Payments, Users, Webhooks};
use crate::types::constants::media_types;
use crate::types::ClientConfig;
use crate::{NftGateError, Result};
use http::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

pub mod request;
mod response;
pub mod transport;


pub use http::Method;
pub use request::{FilePart, MultipartForm, MultipartPart, RequestBody, RequestOptions};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};

/// Client for the NFTGate REST API
///
/// Cloning is cheap; clones share the configuration and the transport.
#[derive(Clone)]
pub struct NftGateClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    authorization: HeaderValue,
}

impl std::fmt::Debug for NftGateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NftGateClient")
            .field("config", &self.config)
            .field("transport", &"<transport>")
            .finish()
    }
}

impl NftGateClient {
    /// Create a client using the `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client from `NFTGATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client that sends requests through `transport`
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        config.validate()?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| NftGateError::config("API key contains invalid header characters"))?;
        authorization.set_sensitive(true);

        Ok(Self {
            config: Arc::new(config),
            transport,
            authorization,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a request and return the decoded JSON body
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        if ![Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(&method) {
            return Err(NftGateError::invalid_request(format!(
                "Unsupported HTTP method: {}",
                method
            )));
        }

        let (body, query) = options.into_parts()?;
        let url = self.build_url(path, &query)?;
        let headers = self.build_headers(&body);

        let request = transport::TransportRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
        };

        let outcome = match self.transport.send(request).await {
            Ok(response) => response::classify_response(response.status, &response.body)
                .map_err(|err| (Some(response.status), err)),
            Err(err) => Err((None, err)),
        };

        match outcome {
            Ok(value) => {
                tracing::info!(%method, %url, "Request succeeded");
                Ok(value)
            }
            Err((status, err)) => {
                tracing::error!(%method, %url, ?status, error = %err, "Request failed");
                Err(err)
            }
        }
    }

    /// Execute a request and decode the body into `T`
    pub async fn execute_as<T: Decode>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.execute(method, path, options).await?;
        T::decode(value)
    }

    /// Build the absolute URL for a resource path
    ///
    /// A leading slash on `path` is dropped so it joins the prefix cleanly.
    pub(crate) fn build_url(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let prefix = self.config.path_prefix.trim_matches('/');
        let path = path.trim_start_matches('/');

        let raw = if prefix.is_empty() {
            format!("{}/{}", base, path)
        } else {
            format!("{}/{}/{}", base, prefix, path)
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| NftGateError::invalid_request(format!("Invalid URL {}: {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Assemble headers for a body encoding
    ///
    /// Multipart bodies get no Content-Type here: the transport generates it
    /// together with the boundary.
    pub(crate) fn build_headers(&self, body: &RequestBody) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(media_types::JSON));
        headers.insert(AUTHORIZATION, self.authorization.clone());

        match body {
            RequestBody::Multipart(_) => {}
            RequestBody::Form(_) => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static(media_types::FORM_URLENCODED),
                );
            }
            RequestBody::Empty | RequestBody::Json(_) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(media_types::JSON));
            }
        }

        headers
    }

    /// User account endpoints
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Supported network endpoints
    pub fn networks(&self) -> Networks<'_> {
        Networks::new(self)
    }

    /// Collection endpoints
    pub fn collections(&self) -> Collections<'_> {
        Collections::new(self)
    }

    /// NFT endpoints
    pub fn nfts(&self) -> Nfts<'_> {
        Nfts::new(self)
    }

    /// Payment endpoints
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    /// Webhook endpoints
    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// File upload endpoints
    pub fn files(&self) -> Files<'_> {
        Files::new(self)
    }
}
