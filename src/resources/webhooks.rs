use super::segment;
use crate::client::{Method, NftGateClient, RequestOptions};
use crate::types::{NewWebhook, Webhook};
use crate::Result;

/// Webhook endpoints
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a NftGateClient,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a NftGateClient) -> Self {
        Self { client }
    }

    /// All registered webhooks
    pub async fn list(&self) -> Result<Vec<Webhook>> {
        self.client
            .execute_as(Method::GET, "/webhooks", RequestOptions::new())
            .await
    }

    /// Register a webhook; the endpoint takes a form-encoded body
    pub async fn create(&self, webhook: &NewWebhook) -> Result<Webhook> {
        self.client
            .execute_as(
                Method::POST,
                "/webhooks",
                RequestOptions::new().form(webhook.form_fields()),
            )
            .await
    }

    /// Remove a webhook
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .execute(
                Method::DELETE,
                &format!("/webhooks/{}", segment(id)?),
                RequestOptions::new(),
            )
            .await?;
        Ok(())
    }
}
