//! Lazy cursor-based pagination
//!
//! A [`Paginator`] presents a paged list endpoint as a forward-only sequence
//! of items. Pages are fetched on demand, one at a time: the first when the
//! sequence is first polled, the next only once the current page has been
//! fully read and the server reported more results.
//!
//! # Examples
//!
//! ```no_run
//! use nftgate::{ClientConfig, NftGateClient};
//!
//! # async fn example() -> nftgate::Result<()> {
//! let client = NftGateClient::new(ClientConfig::new("my-api-key"))?;
//! let mut nfts = client
//!     .nfts()
//!     .paginate_by_address("0x857b06519E91e3A54538791bDbb0E22373e36b66", 137);
//!
//! while nfts.has_next().await? {
//!     let nft = nfts.next_item().await?;
//!     println!("{} #{}", nft.contract_address, nft.token_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A paginator is owned by one caller at a time: every operation takes
//! `&mut self`. Share one across tasks only behind an external lock such as
//! `tokio::sync::Mutex`.

use crate::types::Page;
use crate::{NftGateError, Result};
use async_trait::async_trait;
use futures_util::stream::{self, Stream};
use std::collections::VecDeque;
use std::future::Future;


/// Fetches one page of a listing
///
/// Implementations bind every parameter of the underlying list call except
/// the cursor, which the paginator supplies: absent for the first page, the
/// previous page's cursor afterwards.
#[async_trait]
pub trait FetchPage<T>: Send + Sync {
    /// Fetch the page located by `cursor`
    async fn fetch_page(&self, cursor: Option<String>) -> Result<Page<T>>;
}

#[async_trait]
impl<T, F, Fut> FetchPage<T> for F
where
    F: Fn(Option<String>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Page<T>>> + Send + 'static,
    T: Send + 'static,
{
    async fn fetch_page(&self, cursor: Option<String>) -> Result<Page<T>> {
        (self)(cursor).await
    }
}

/// Position of a [`Paginator`] in its listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// Nothing fetched yet
    Idle,
    /// Holding the most recently fetched page
    Buffered,
    /// The last page has been fetched and fully read
    Exhausted,
}

/// Lazy, restartable sequence over a paginated listing
pub struct Paginator<T, F> {
    fetcher: F,
    buffer: VecDeque<T>,
    cursor: Option<String>,
    has_more: bool,
    state: PaginatorState,
    consumed: usize,
}

impl<T, F> std::fmt::Debug for Paginator<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("state", &self.state)
            .field("buffered", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("has_more", &self.has_more)
            .field("consumed", &self.consumed)
            .finish()
    }
}

impl<T, F> Paginator<T, F>
where
    F: FetchPage<T>,
{
    /// Create a paginator; nothing is fetched until it is polled
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            buffer: VecDeque::new(),
            cursor: None,
            has_more: false,
            state: PaginatorState::Idle,
            consumed: 0,
        }
    }

    /// Whether another item is available, fetching pages as needed
    ///
    /// This may perform network I/O. A failed fetch is returned unchanged and
    /// leaves the paginator exactly as it was, so the call can be retried.
    pub async fn has_next(&mut self) -> Result<bool> {
        loop {
            if !self.buffer.is_empty() {
                return Ok(true);
            }

            let cursor = match self.state {
                PaginatorState::Exhausted => return Ok(false),
                PaginatorState::Idle => None,
                PaginatorState::Buffered if !self.has_more => {
                    self.state = PaginatorState::Exhausted;
                    return Ok(false);
                }
                PaginatorState::Buffered => self.cursor.clone(),
            };

            let page = self.fetcher.fetch_page(cursor.clone()).await?;
            check_progress(&page, cursor.as_deref())?;

            tracing::debug!(
                cursor = ?cursor,
                items = page.items.len(),
                has_more = page.has_more,
                "Fetched page"
            );

            self.cursor = page.cursor;
            self.has_more = page.has_more;
            self.buffer = page.items.into();
            self.state = if self.buffer.is_empty() && !self.has_more {
                PaginatorState::Exhausted
            } else {
                PaginatorState::Buffered
            };
        }
    }

    /// Return the next item and advance
    ///
    /// Fails with [`NftGateError::IteratorExhausted`] once the listing is
    /// exhausted; the paginator is not modified in that case.
    pub async fn next_item(&mut self) -> Result<T> {
        if !self.has_next().await? {
            return Err(NftGateError::IteratorExhausted);
        }

        let item = self
            .buffer
            .pop_front()
            .ok_or(NftGateError::IteratorExhausted)?;
        self.consumed += 1;
        Ok(item)
    }

    /// Drain every remaining item
    ///
    /// Either every item is returned or, if any fetch fails, only the error.
    pub async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while self.has_next().await? {
            items.push(self.next_item().await?);
        }
        Ok(items)
    }

    /// Go back to the first page, discarding buffered items and the cursor
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.cursor = None;
        self.has_more = false;
        self.state = PaginatorState::Idle;
        self.consumed = 0;
    }

    /// Cursor of the most recently fetched page
    pub fn current_cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Current state
    pub fn state(&self) -> PaginatorState {
        self.state
    }

    /// Items returned by [`Self::next_item`] since creation or the last restart
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Turn the paginator into a stream of items, ending after the first error
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> {
        stream::try_unfold(self, |mut paginator| async move {
            if paginator.has_next().await? {
                let item = paginator.next_item().await?;
                Ok::<_, NftGateError>(Some((item, paginator)))
            } else {
                Ok(None)
            }
        })
    }
}

/// Reject pages that would make the paginator loop on the same position
fn check_progress<T>(page: &Page<T>, requested: Option<&str>) -> Result<()> {
    if !page.has_more {
        return Ok(());
    }

    match page.cursor.as_deref() {
        None => Err(NftGateError::malformed(
            "page reported more results without a cursor",
        )),
        Some(next) if Some(next) == requested => Err(NftGateError::malformed(format!(
            "page returned its own cursor `{}` as the next one",
            next
        ))),
        Some(_) => Ok(()),
    }
}
