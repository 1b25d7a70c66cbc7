use crate::client::{FilePart, Method, MultipartForm, NftGateClient, RequestOptions};
use crate::types::UploadedFile;
use crate::Result;
use std::path::Path;

/// File upload endpoints
#[derive(Debug, Clone, Copy)]
pub struct Files<'a> {
    client: &'a NftGateClient,
}

impl<'a> Files<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// Upload in-memory content
    pub async fn upload(&self, file: FilePart) -> Result<UploadedFile> {
        let form = MultipartForm::new().file("file", file);
        self.client
            .execute_as(Method::POST, "/files", RequestOptions::new().multipart(form))
            .await
    }

    /// Upload a file from disk
    pub async fn upload_path(&self, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let file = FilePart::from_path(path).await?;
        self.upload(file).await
    }
}
