//! Webhook subscription types

use serde::{Deserialize, Serialize};

/// A registered webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: String,
    /// Endpoint receiving event deliveries
    pub url: String,
    /// Subscribed event names
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub active: bool,
}

/// Parameters for registering a webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWebhook {
    pub url: String,
    pub events: Vec<String>,
    /// Shared secret used to sign deliveries
    pub secret: Option<String>,
}

impl NewWebhook {
    /// Create webhook parameters
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            events: Vec::new(),
            secret: None,
        }
    }

    /// Subscribe to an event
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }

    /// Set the signing secret
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Form fields; list values use the `events[]` convention
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![("url".to_string(), self.url.clone())];
        fields.extend(
            self.events
                .iter()
                .map(|event| ("events[]".to_string(), event.clone())),
        );
        if let Some(secret) = &self.secret {
            fields.push(("secret".to_string(), secret.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields() {
        let webhook = NewWebhook::new("https://example.com/hook")
            .with_event("nft.minted")
            .with_event("payment.paid")
            .with_secret("s3cret");

        assert_eq!(
            webhook.form_fields(),
            vec![
                ("url".to_string(), "https://example.com/hook".to_string()),
                ("events[]".to_string(), "nft.minted".to_string()),
                ("events[]".to_string(), "payment.paid".to_string()),
                ("secret".to_string(), "s3cret".to_string()),
            ]
        );
    }
}
