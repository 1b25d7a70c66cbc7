//! Request options and body encodings

use crate::types::constants::media_types;
use crate::{NftGateError, Result};
use serde_json::Value;
use std::path::Path;

/// Body encoding of a request
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document
    Json(Value),
    /// `application/x-www-form-urlencoded` fields
    Form(Vec<(String, String)>),
    /// `multipart/form-data` parts; the transport owns the boundary
    Multipart(MultipartForm),
}

impl RequestBody {
    fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Form(_) => "form",
            RequestBody::Multipart(_) => "multipart",
        }
    }

    /// Whether this body is sent as multipart
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// A file to upload as one multipart part
#[derive(Clone)]
pub struct FilePart {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the content
    pub content_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FilePart {
    /// Create a file part from in-memory content
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Override the MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                NftGateError::invalid_request(format!(
                    "Upload path has no file name: {}",
                    path.display()
                ))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "json" => media_types::JSON,
        _ => media_types::OCTET_STREAM,
    }
}

/// One part of a multipart body
#[derive(Debug, Clone)]
pub enum MultipartPart {
    /// Plain text field
    Text { name: String, value: String },
    /// File field
    File { name: String, file: FilePart },
}

/// Ordered multipart form
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

impl MultipartForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a file field
    pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
        self.parts.push(MultipartPart::File {
            name: name.into(),
            file,
        });
        self
    }

    /// Parts in insertion order
    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Consume the form into its parts
    pub fn into_parts(self) -> Vec<MultipartPart> {
        self.parts
    }
}

/// Per-call options of [`crate::NftGateClient::execute`]
///
/// At most one body encoding may be set. Setting a second one is recorded and
/// rejected when the request is executed.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    body: RequestBody,
    query: Vec<(String, String)>,
    conflict: Option<(&'static str, &'static str)>,
}

impl RequestOptions {
    /// Create options without a body or query
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `body` as JSON
    pub fn json(mut self, body: Value) -> Self {
        self.set_body(RequestBody::Json(body));
        self
    }

    /// Send form-encoded fields
    pub fn form<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.set_body(RequestBody::Form(fields));
        self
    }

    /// Send a multipart form
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.set_body(RequestBody::Multipart(form));
        self
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Append a query parameter when `value` is present
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Query parameters in insertion order
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The body encoding currently set
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    fn set_body(&mut self, body: RequestBody) {
        if !matches!(self.body, RequestBody::Empty) && self.conflict.is_none() {
            self.conflict = Some((self.body.kind(), body.kind()));
        }
        self.body = body;
    }

    pub(crate) fn into_parts(self) -> Result<(RequestBody, Vec<(String, String)>)> {
        if let Some((first, second)) = self.conflict {
            return Err(NftGateError::invalid_request(format!(
                "Request sets more than one body encoding ({} and {})",
                first, second
            )));
        }
        Ok((self.body, self.query))
    }
}
