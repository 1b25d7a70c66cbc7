use super::{list_page, paginated, segment};
use crate::client::{Method, NftGateClient, RequestOptions};
use crate::pagination::{FetchPage, Paginator};
use crate::types::{Page, Payment};
use crate::Result;

/// Payment endpoints
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a NftGateClient,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// One page of the account's payments, newest first
    pub async fn list(&self, cursor: Option<&str>) -> Result<Page<Payment>> {
        list_page(self.client, "/payments", RequestOptions::new(), cursor).await
    }

    /// Every payment of the account, fetched lazily
    pub fn paginate(&self) -> Paginator<Payment, impl FetchPage<Payment>> {
        paginated(self.client, |client, cursor| async move {
            client.payments().list(cursor.as_deref()).await
        })
    }

    /// One payment by id
    pub async fn get(&self, id: &str) -> Result<Payment> {
        self.client
            .execute_as(
                Method::GET,
                &format!("/payments/{}", segment(id)?),
                RequestOptions::new(),
            )
            .await
    }
}
