//! Account types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The account owning the API key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Custodial wallet assigned to the account
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
