//! HTTP transport boundary
//!
//! The request pipeline talks to the network only through [`HttpTransport`].
//! [`ReqwestTransport`] is the production implementation; tests inject their
//! own implementations through [`crate::NftGateClient::with_transport`].

use super::request::{MultipartForm, MultipartPart, RequestBody};
use crate::types::ClientConfig;
use crate::{NftGateError, Result};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use url::Url;

/// A fully assembled request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, query included
    pub url: Url,
    /// Headers assembled by the pipeline
    pub headers: HeaderMap,
    /// Body encoding
    pub body: RequestBody,
}

/// Raw outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues requests on behalf of the client
///
/// Implementations must be safe to share between concurrent operations and
/// report connection-level problems as [`NftGateError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return its status and raw body
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport carrying the config's timeouts and user agent
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| NftGateError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(&value).map_err(|e| {
                    NftGateError::invalid_request(format!("Failed to encode JSON body: {}", e))
                })?;
                builder.body(bytes)
            }
            RequestBody::Form(fields) => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(&fields)
                    .finish();
                builder.body(encoded)
            }
            // reqwest writes the Content-Type header, boundary included
            RequestBody::Multipart(form) => builder.multipart(to_reqwest_form(form)?),
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        Ok(TransportResponse { status, body })
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<reqwest::multipart::Form> {
    form.into_parts()
        .into_iter()
        .try_fold(reqwest::multipart::Form::new(), |form, part| match part {
            MultipartPart::Text { name, value } => Ok(form.text(name, value)),
            MultipartPart::File { name, file } => {
                let part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|e| {
                        NftGateError::invalid_request(format!(
                            "Invalid content type {}: {}",
                            file.content_type, e
                        ))
                    })?;
                Ok(form.part(name, part))
            }
        })
}

fn transport_error(err: reqwest::Error) -> NftGateError {
    if err.is_timeout() {
        NftGateError::transport(format!("request timed out: {}", err))
    } else if err.is_connect() {
        NftGateError::transport(format!("connection failed: {}", err))
    } else {
        NftGateError::transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::request::FilePart;
    use http::header::CONTENT_TYPE;
    use mockito::{Matcher, Server};
    use std::time::Duration;

    fn transport() -> ReqwestTransport {
        ReqwestTransport::new(&ClientConfig::new("key")).unwrap()
    }

    fn request(method: Method, url: &str, body: RequestBody) -> TransportRequest {
        TransportRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: HeaderMap::new(),
            body,
        }
    }

    #[tokio::test]
    async fn test_send_returns_status_and_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/networks")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let response = transport()
            .send(request(
                Method::GET,
                &format!("{}/v1/networks", server.url()),
                RequestBody::Empty,
            ))
            .await
            .unwrap();

        assert_eq!(response, TransportResponse::new(404, "not here"));
    }

    #[tokio::test]
    async fn test_form_body_is_urlencoded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/hooks")
            .match_body("url=https%3A%2F%2Fexample.com%2Fh&events=mint")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let body = RequestBody::Form(vec![
            ("url".to_string(), "https://example.com/h".to_string()),
            ("events".to_string(), "mint".to_string()),
        ]);
        transport()
            .send(request(Method::POST, &format!("{}/hooks", server.url()), body))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_multipart_boundary_comes_from_transport() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/files")
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=.+$".to_string()),
            )
            .match_body(Matcher::Regex("name=\"file\"; filename=\"a.png\"".to_string()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let form = MultipartForm::new()
            .text("title", "A")
            .file("file", FilePart::new("a.png", b"png-bytes".to_vec()));
        let mut req = request(
            Method::POST,
            &format!("{}/files", server.url()),
            RequestBody::Multipart(form),
        );
        req.headers.insert("accept", "application/json".parse().unwrap());

        transport().send(req).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_json_body_is_sent_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/things/1")
            .match_body(Matcher::Json(serde_json::json!({"name": "thing"})))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let mut req = request(
            Method::PUT,
            &format!("{}/things/1", server.url()),
            RequestBody::Json(serde_json::json!({"name": "thing"})),
        );
        req.headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());

        transport().send(req).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_slow_response_hits_total_timeout() {
        // accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let config = ClientConfig::new("key").with_timeout(Duration::from_millis(200));
        let transport = ReqwestTransport::new(&config).unwrap();

        let started = std::time::Instant::now();
        let err = transport
            .send(request(
                Method::GET,
                &format!("http://{}/v1/me", addr),
                RequestBody::Empty,
            ))
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert!(err.to_string().contains("timed out"));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let config = ClientConfig::new("key").with_connect_timeout(Duration::from_secs(1));
        let transport = ReqwestTransport::new(&config).unwrap();

        let err = transport
            .send(request(Method::GET, "http://127.0.0.1:1/v1", RequestBody::Empty))
            .await
            .unwrap_err();

        assert!(err.is_transport());
    }
}
