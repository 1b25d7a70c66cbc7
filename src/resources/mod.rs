//! Typed resource endpoints
//!
//! Each handle borrows the client and maps one endpoint to one method. List
//! endpoints come in two forms: a single-page call taking an explicit cursor,
//! and a `paginate*` variant returning a lazy [`Paginator`] that binds every
//! parameter but the cursor.

use crate::client::{Method, NftGateClient, RequestOptions};
use crate::pagination::{FetchPage, Paginator};
use crate::types::Page;
use crate::{decode::Decode, NftGateError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::future::Future;

mod collections;
mod files;
mod networks;
mod nfts;
mod payments;
mod users;
mod webhooks;


pub use collections::Collections;
pub use files::Files;
pub use networks::Networks;
pub use nfts::Nfts;
pub use payments::Payments;
pub use users::Users;
pub use webhooks::Webhooks;

/// Characters left as-is in a path segment (RFC 3986 unreserved)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode a caller-supplied value as exactly one path segment
///
/// `/`, `?` and `#` are escaped so the value cannot leave its segment. Empty
/// values and dot segments would be collapsed by URL normalization, so they
/// are rejected.
pub(crate) fn segment(value: &str) -> Result<String> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(NftGateError::invalid_request(format!(
            "`{}` is not a valid path segment",
            value
        )));
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

/// Fetch one page from a list endpoint using the default envelope
async fn list_page<T: Decode>(
    client: &NftGateClient,
    path: &str,
    options: RequestOptions,
    cursor: Option<&str>,
) -> Result<Page<T>> {
    let value = client
        .execute(Method::GET, path, options.query_opt("cursor", cursor))
        .await?;
    Page::decode(value)
}

/// Build a paginator whose fetches run on a clone of `client`
fn paginated<T, L, Fut>(client: &NftGateClient, list: L) -> Paginator<T, impl FetchPage<T>>
where
    T: Send + 'static,
    L: Fn(NftGateClient, Option<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
{
    let client = client.clone();
    Paginator::new(move |cursor: Option<String>| list(client.clone(), cursor))
}
