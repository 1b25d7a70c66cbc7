use crate::client::{Method, NftGateClient, RequestOptions};
use crate::types::User;
use crate::Result;

/// User account endpoints
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a NftGateClient,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// The account owning the API key
    pub async fn me(&self) -> Result<User> {
        self.client
            .execute_as(Method::GET, "/me", RequestOptions::new())
            .await
    }
}
