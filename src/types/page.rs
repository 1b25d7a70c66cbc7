//! Page descriptor returned by list endpoints

use crate::decode::Decode;
use crate::{NftGateError, Result};
use serde_json::Value;

/// One page of a cursor-paginated listing
///
/// When `has_more` is false the cursor must not be used for further fetching,
/// whether or not the server sent one.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Opaque token locating the next page
    pub cursor: Option<String>,
    /// Whether another page follows this one
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Create a page that is followed by another one
    pub fn new(items: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            items,
            cursor: Some(cursor.into()),
            has_more: true,
        }
    }

    /// Create the final page of a listing
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: None,
            has_more: false,
        }
    }

    /// Cursor to request the following page with, if there is one
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.cursor.as_deref()
        } else {
            None
        }
    }
}

/// Field names of the page envelope in a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Key of the items array
    pub items: &'static str,
    /// Key of the cursor
    pub cursor: &'static str,
    /// Key of the more-pages flag
    pub has_more: &'static str,
}

impl PageLayout {
    /// Envelope used by most list endpoints
    pub const DEFAULT: Self = Self {
        items: "data",
        cursor: "next_cursor",
        has_more: "has_more",
    };
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<T: Decode> Page<T> {
    /// Decode a page envelope, decoding each item with `T`'s decoder
    ///
    /// A missing items array or more-pages flag is a malformed response; an
    /// item the decoder rejects is a decoding failure.
    pub fn decode_with(value: Value, layout: &PageLayout) -> Result<Self> {
        let Value::Object(mut envelope) = value else {
            return Err(NftGateError::malformed("page response is not a JSON object"));
        };

        let items = match envelope.remove(layout.items) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(NftGateError::malformed(format!(
                    "page response is missing the `{}` array",
                    layout.items
                )))
            }
        };

        let has_more = envelope
            .get(layout.has_more)
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                NftGateError::malformed(format!(
                    "page response is missing the `{}` flag",
                    layout.has_more
                ))
            })?;

        let cursor = match envelope.remove(layout.cursor) {
            None | Some(Value::Null) => None,
            Some(Value::String(cursor)) if cursor.is_empty() => None,
            Some(Value::String(cursor)) => Some(cursor),
            Some(Value::Number(cursor)) => Some(cursor.to_string()),
            Some(other) => {
                return Err(NftGateError::malformed(format!(
                    "page cursor `{}` has unexpected type: {}",
                    layout.cursor, other
                )))
            }
        };

        let items = items
            .into_iter()
            .map(T::decode)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            cursor,
            has_more,
        })
    }

    /// Decode a page envelope using [`PageLayout::DEFAULT`]
    pub fn decode(value: Value) -> Result<Self> {
        Self::decode_with(value, &PageLayout::DEFAULT)
    }
}
