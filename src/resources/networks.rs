use crate::client::{Method, NftGateClient, RequestOptions};
use crate::types::Network;
use crate::Result;

/// Supported network endpoints
#[derive(Debug, Clone, Copy)]
pub struct Networks<'a> {
    client: &'a NftGateClient,
}

impl<'a> Networks<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// All networks the API supports
    pub async fn list(&self) -> Result<Vec<Network>> {
        self.client
            .execute_as(Method::GET, "/networks", RequestOptions::new())
            .await
    }

    /// One network by chain id
    pub async fn get(&self, chain_id: u64) -> Result<Network> {
        self.client
            .execute_as(
                Method::GET,
                &format!("/networks/{}", chain_id),
                RequestOptions::new(),
            )
            .await
    }
}
