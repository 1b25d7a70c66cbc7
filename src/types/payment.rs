//! Payment types

use crate::decode::deserialize_discriminator;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A payment collected for a mint or a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    /// Amount in `currency` units
    pub amount: Decimal,
    /// Currency code, e.g. "USD" or "USDC"
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub collection_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Lifecycle status of a payment
///
/// Raw values are upper-cased before matching; anything outside this set is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Pending,
    Processing,
    Paid,
    Failed,
    Refunded,
    Expired,
}

impl PaymentStatus {
    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Processing => "PROCESSING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Failed => "FAILED",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::Expired => "EXPIRED",
        }
    }

    /// Whether the payment can no longer change
    pub fn is_final(&self) -> bool {
        !matches!(self, PaymentStatus::Pending | PaymentStatus::Processing)
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PROCESSING" => Ok(PaymentStatus::Processing),
            "PAID" => Ok(PaymentStatus::Paid),
            "FAILED" => Ok(PaymentStatus::Failed),
            "REFUNDED" => Ok(PaymentStatus::Refunded),
            "EXPIRED" => Ok(PaymentStatus::Expired),
            other => Err(format!("unknown payment status `{}`", other)),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PaymentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_discriminator(deserializer)
    }
}
