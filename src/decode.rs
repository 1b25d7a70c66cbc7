//! Decoder boundary between raw JSON values and typed records
//!
//! Every type that implements [`serde::de::DeserializeOwned`] decodes through
//! [`Decode`]. Records that need stricter rules (such as status enums) encode
//! them in their own `Deserialize` implementation, so that a rejection
//! surfaces as [`NftGateError::Decoding`] rather than a silent default.

use crate::{NftGateError, Result};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;

/// Converts a raw JSON value into a typed record
pub trait Decode: Sized {
    /// Decode `value`, failing with [`NftGateError::Decoding`]
    fn decode(value: Value) -> Result<Self>;
}

impl<T: DeserializeOwned> Decode for T {
    fn decode(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            NftGateError::decoding(format!(
                "Failed to decode {}: {}",
                std::any::type_name::<T>(),
                e
            ))
        })
    }
}

/// Normalize a server-provided discriminator before matching it
///
/// The API is inconsistent about casing, so values are trimmed and
/// upper-cased; matching itself stays exact.
pub fn normalize_discriminator(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Deserialize a string discriminator through [`normalize_discriminator`] and `FromStr`
pub(crate) fn deserialize_discriminator<'de, D, T>(
    deserializer: D,
) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    normalize_discriminator(&raw)
        .parse()
        .map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Record {
        id: String,
        count: u32,
    }

    #[test]
    fn test_decode_success() {
        let record = Record::decode(json!({"id": "abc", "count": 3, "ignored": true})).unwrap();
        assert_eq!(
            record,
            Record {
                id: "abc".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_decode_missing_field_is_decoding_failure() {
        let err = Record::decode(json!({"id": "abc"})).unwrap_err();
        assert!(matches!(err, NftGateError::Decoding(_)));
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_normalize_discriminator() {
        assert_eq!(normalize_discriminator(" pending "), "PENDING");
        assert_eq!(normalize_discriminator("Paid"), "PAID");
    }
}
