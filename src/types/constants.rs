//! Common constants for endpoints, environment variables and media types

/// Default API endpoints and client settings
pub mod endpoints {
    use std::time::Duration;

    /// Production API origin
    pub const DEFAULT_BASE_URL: &str = "https://api.nftgate.io";
    /// Path prefix shared by every resource route
    pub const DEFAULT_PATH_PREFIX: &str = "/v1";
    /// Default time allowed to establish a connection
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Default total request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default user agent string
    pub const DEFAULT_USER_AGENT: &str = concat!("nftgate-sdk/", env!("CARGO_PKG_VERSION"));
}

/// Environment variables read by [`crate::types::ClientConfig::from_env`]
pub mod env_vars {
    /// Bearer credential
    pub const API_KEY: &str = "NFTGATE_API_KEY";
    /// API origin override
    pub const BASE_URL: &str = "NFTGATE_BASE_URL";
    /// Total request timeout in seconds
    pub const TIMEOUT_SECS: &str = "NFTGATE_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "NFTGATE_CONNECT_TIMEOUT_SECS";
}

/// Media types used in request headers
pub mod media_types {
    /// JSON bodies and the `Accept` header
    pub const JSON: &str = "application/json";
    /// URL-encoded form bodies
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
    /// Fallback content type for uploaded file parts
    pub const OCTET_STREAM: &str = "application/octet-stream";
}
