use super::{list_page, paginated, segment};
use crate::client::{Method, NftGateClient, RequestOptions};
use crate::pagination::{FetchPage, Paginator};
use crate::types::{Collection, NewCollection, Page};
use crate::{NftGateError, Result};

/// Collection endpoints
#[derive(Debug, Clone, Copy)]
pub struct Collections<'a> {
    client: &'a NftGateClient,
}

impl<'a> Collections<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// One page of the collections owned by `owner`
    pub async fn list(&self, owner: &str, cursor: Option<&str>) -> Result<Page<Collection>> {
        list_page(
            self.client,
            "/collections",
            RequestOptions::new().query("owner", owner),
            cursor,
        )
        .await
    }

    /// Every collection owned by `owner`, fetched lazily
    pub fn paginate(
        &self,
        owner: impl Into<String>,
    ) -> Paginator<Collection, impl FetchPage<Collection>> {
        let owner = owner.into();
        paginated(self.client, move |client, cursor| {
            let owner = owner.clone();
            async move { client.collections().list(&owner, cursor.as_deref()).await }
        })
    }

    /// One collection by id
    pub async fn get(&self, id: &str) -> Result<Collection> {
        self.client
            .execute_as(
                Method::GET,
                &format!("/collections/{}", segment(id)?),
                RequestOptions::new(),
            )
            .await
    }

    /// Create and start deploying a collection
    pub async fn create(&self, collection: &NewCollection) -> Result<Collection> {
        let body = serde_json::to_value(collection).map_err(|e| {
            NftGateError::invalid_request(format!("Failed to encode collection: {}", e))
        })?;
        self.client
            .execute_as(
                Method::POST,
                "/collections",
                RequestOptions::new().json(body),
            )
            .await
    }
}
