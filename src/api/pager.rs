//! Offset-based pagination over list endpoints.
//!
//! Wish list endpoints take a `start` offset and a `limit` page size and
//! signal more data through `paging.next` in the envelope. A [`Pager`]
//! drives one such listing:
//!
//! 1. request the page at the current offset,
//! 2. classify the envelope (a failure aborts the listing),
//! 3. convert every record with the factory, in server order,
//! 4. advance the offset by [`PAGE_SIZE`], whether or not the page had records,
//! 5. stop once the envelope reports no more pages.
//!
//! At least one request is always made. An empty page with `has_more` set
//! does not stop the loop. Pages are fetched one after another, never
//! concurrently.
//!
//! [`Pager::collect_all`] returns every record or the first error, never a
//! partial list. [`Pager::next_page`] yields pages lazily; dropping the
//! pager (or simply not calling it again) stops the listing.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use wish_api::api::{PageCursor, Pager};
//! use wish_api::clients::ResponseEnvelope;
//!
//! # tokio_test::block_on(async {
//! let pager = Pager::new(
//!     "Number",
//!     |cursor: PageCursor| async move {
//!         let has_more = cursor.offset < 50;
//!         Ok(ResponseEnvelope::new(0, json!([cursor.offset]), has_more))
//!     },
//!     |record: Value| serde_json::from_value::<u32>(record),
//! );
//!
//! assert_eq!(pager.collect_all().await.unwrap(), vec![0, 50]);
//! # });
//! ```

use std::future::Future;

use serde_json::Value;

use crate::api::classify::check_envelope;
use crate::api::errors::ApiError;
use crate::clients::{HttpError, RequestParams, ResponseEnvelope};

/// Records requested per page.
pub const PAGE_SIZE: u32 = 50;

/// Converts one raw record into a typed model.
pub type RecordFactory<T> = fn(Value) -> Result<T, serde_json::Error>;

/// Position of one page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageCursor {
    /// Offset of the first record on the page.
    pub offset: u32,
    /// Records requested per page.
    pub page_size: u32,
}

impl PageCursor {
    /// The cursor for the first page.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            offset: 0,
            page_size: PAGE_SIZE,
        }
    }

    /// Returns the cursor for the following page, or `None` once the offset
    /// would no longer fit in a `u32`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.offset.checked_add(self.page_size) {
            Some(offset) => Some(Self {
                offset,
                page_size: self.page_size,
            }),
            None => None,
        }
    }

    /// Writes `limit` and `start` into `params`, replacing any previous values.
    pub fn apply(&self, params: &mut RequestParams) {
        params.insert("limit", self.page_size);
        params.insert("start", self.offset);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagerState {
    Fetching,
    Finished,
    Failed,
}

/// A lazy, sequential listing over one paginated endpoint.
///
/// `F` performs the request for a [`PageCursor`]; it is the only place the
/// pager touches the network. The factory turns each raw record into `T`.
pub struct Pager<F, T> {
    resource: &'static str,
    call: F,
    factory: RecordFactory<T>,
    cursor: PageCursor,
    pages: u32,
    state: PagerState,
}

impl<F, T> std::fmt::Debug for Pager<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("resource", &self.resource)
            .field("cursor", &self.cursor)
            .field("pages", &self.pages)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<F, Fut, T> Pager<F, T>
where
    F: FnMut(PageCursor) -> Fut,
    Fut: Future<Output = Result<ResponseEnvelope, HttpError>>,
{
    /// Creates a pager positioned at the first page.
    ///
    /// `resource` names the model in conversion errors and logs.
    #[must_use]
    pub fn new(resource: &'static str, call: F, factory: RecordFactory<T>) -> Self {
        Self {
            resource,
            call,
            factory,
            cursor: PageCursor::first(),
            pages: 0,
            state: PagerState::Fetching,
        }
    }

    /// Returns the cursor the next request will use.
    #[must_use]
    pub const fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Returns the number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages
    }

    /// Returns `true` once the listing has ended, successfully or not.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state != PagerState::Fetching
    }

    /// Fetches and converts the next page.
    ///
    /// Returns `None` once the listing has ended. After an error the pager
    /// is finished and returns `None` from then on.
    ///
    /// A page that reports more data when no further offset exists ends the
    /// listing with [`ApiError::OffsetOverflow`].
    pub async fn next_page(&mut self) -> Option<Result<Vec<T>, ApiError>> {
        if self.is_done() {
            return None;
        }

        let cursor = self.cursor;
        let result = match self.fetch(cursor).await {
            Ok((_, true)) if cursor.next().is_none() => Err(ApiError::OffsetOverflow {
                resource: self.resource,
                offset: cursor.offset,
            }),
            other => other,
        };
        self.pages += 1;

        match &result {
            Ok((items, has_more)) => {
                tracing::debug!(
                    resource = self.resource,
                    offset = cursor.offset,
                    records = items.len(),
                    has_more = *has_more,
                    "Fetched Wish API page"
                );
                match cursor.next() {
                    Some(next) if *has_more => self.cursor = next,
                    _ => self.state = PagerState::Finished,
                }
            }
            Err(error) => {
                tracing::debug!(
                    resource = self.resource,
                    offset = cursor.offset,
                    %error,
                    "Wish API listing aborted"
                );
                self.state = PagerState::Failed;
            }
        }

        Some(result.map(|(items, _)| items))
    }

    /// Drains the listing into one vector in server order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; records from earlier pages are
    /// discarded.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ApiError> {
        let mut all = Vec::new();
        while let Some(page) = self.next_page().await {
            all.extend(page?);
        }
        Ok(all)
    }

    async fn fetch(&mut self, cursor: PageCursor) -> Result<(Vec<T>, bool), ApiError> {
        let envelope = check_envelope((self.call)(cursor).await?)?;
        let has_more = envelope.has_more();

        let items = envelope
            .into_records()
            .into_iter()
            .map(self.factory)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ApiError::Conversion {
                resource: self.resource,
                source,
            })?;

        Ok((items, has_more))
    }
}

/// Fetches every page of a listing and returns all records in order.
///
/// Shorthand for `Pager::new(resource, call, factory).collect_all()`.
///
/// # Errors
///
/// Returns the first transport, service or conversion error.
pub async fn fetch_all<F, Fut, T>(
    resource: &'static str,
    call: F,
    factory: RecordFactory<T>,
) -> Result<Vec<T>, ApiError>
where
    F: FnMut(PageCursor) -> Fut,
    Fut: Future<Output = Result<ResponseEnvelope, HttpError>>,
{
    Pager::new(resource, call, factory).collect_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ServiceFailure;
    use crate::clients::HttpResponseError;
    use serde_json::json;
    use std::cell::RefCell;

    fn number(record: Value) -> Result<u64, serde_json::Error> {
        serde_json::from_value(record)
    }

    #[test]
    fn test_cursor_advances_by_page_size() {
        let cursor = PageCursor::first();
        assert_eq!(cursor.offset, 0);
        assert_eq!(cursor.page_size, PAGE_SIZE);
        assert_eq!(cursor.next().map(|c| c.offset), Some(50));
        assert_eq!(cursor.next().and_then(PageCursor::next).map(|c| c.offset), Some(100));
    }

    #[test]
    fn test_cursor_stops_at_largest_offset() {
        let last = PageCursor {
            offset: u32::MAX - 10,
            page_size: PAGE_SIZE,
        };
        assert_eq!(last.next(), None);
    }

    #[tokio::test]
    async fn test_more_pages_past_largest_offset_is_an_error() {
        let offsets = RefCell::new(Vec::new());
        let mut pager = Pager::new(
            "Number",
            |cursor: PageCursor| {
                offsets.borrow_mut().push(cursor.offset);
                async move { Ok(ResponseEnvelope::new(0, json!([1]), true)) }
            },
            number,
        );
        pager.cursor = PageCursor {
            offset: u32::MAX - PAGE_SIZE - 10,
            page_size: PAGE_SIZE,
        };

        assert_eq!(pager.next_page().await.unwrap().unwrap(), vec![1]);
        let error = pager.next_page().await.unwrap().unwrap_err();

        assert!(matches!(
            error,
            ApiError::OffsetOverflow { resource: "Number", offset } if offset == u32::MAX - 10
        ));
        assert!(pager.is_done());
        assert!(pager.next_page().await.is_none());
        assert_eq!(offsets.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_last_page_at_largest_offset_finishes_normally() {
        let mut pager = Pager::new(
            "Number",
            |_: PageCursor| async { Ok(ResponseEnvelope::new(0, json!([4]), false)) },
            number,
        );
        pager.cursor = PageCursor {
            offset: u32::MAX - 10,
            page_size: PAGE_SIZE,
        };

        assert_eq!(pager.collect_all().await.unwrap(), vec![4]);
    }

    #[test]
    fn test_cursor_apply_sets_limit_and_start() {
        let mut params = RequestParams::new().with("start", 7).with("sku", "A");
        PageCursor {
            offset: 50,
            page_size: PAGE_SIZE,
        }
        .apply(&mut params);

        assert_eq!(params.get("limit").map(|v| v.to_wire()), Some("50".to_string()));
        assert_eq!(params.get("start").map(|v| v.to_wire()), Some("50".to_string()));
        assert!(params.contains("sku"));
    }

    #[tokio::test]
    async fn test_single_page_without_more() {
        let offsets = RefCell::new(Vec::new());
        let result = fetch_all(
            "Number",
            |cursor: PageCursor| {
                offsets.borrow_mut().push(cursor.offset);
                async move { Ok(ResponseEnvelope::new(0, json!([1, 2, 3]), false)) }
            },
            number,
        )
        .await
        .unwrap();

        assert_eq!(result, vec![1, 2, 3]);
        assert_eq!(*offsets.borrow(), vec![0]);
    }

    #[tokio::test]
    async fn test_empty_page_with_more_continues() {
        let offsets = RefCell::new(Vec::new());
        let result = fetch_all(
            "Number",
            |cursor: PageCursor| {
                offsets.borrow_mut().push(cursor.offset);
                let envelope = match cursor.offset {
                    0 => ResponseEnvelope::new(0, json!([]), true),
                    _ => ResponseEnvelope::new(0, json!([9]), false),
                };
                async move { Ok(envelope) }
            },
            number,
        )
        .await
        .unwrap();

        assert_eq!(result, vec![9]);
        assert_eq!(*offsets.borrow(), vec![0, 50]);
    }

    #[tokio::test]
    async fn test_empty_first_page_without_more_returns_nothing() {
        let result = fetch_all(
            "Number",
            |_| async { Ok(ResponseEnvelope::new(0, json!({}), false)) },
            number,
        )
        .await
        .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_aborts_listing() {
        let calls = RefCell::new(0);
        let result = fetch_all(
            "Number",
            |cursor: PageCursor| {
                *calls.borrow_mut() += 1;
                let envelope = if cursor.offset == 0 {
                    ResponseEnvelope::new(0, json!([1]), true)
                } else {
                    ResponseEnvelope::new(1016, json!({}), true)
                };
                async move { Ok(envelope) }
            },
            number,
        )
        .await;

        assert!(matches!(
            result,
            Err(ApiError::Service {
                failure: ServiceFailure::Unauthorized { .. },
                ..
            })
        ));
        assert_eq!(*calls.borrow(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_aborts_listing() {
        let result = fetch_all(
            "Number",
            |_| async {
                Err(HttpError::Response(HttpResponseError {
                    code: 503,
                    message: "unavailable".to_string(),
                    error_reference: None,
                }))
            },
            number,
        )
        .await;

        assert!(matches!(result, Err(ApiError::Http(_))));
    }

    #[tokio::test]
    async fn test_conversion_error_names_resource() {
        let result = fetch_all(
            "Number",
            |_| async { Ok(ResponseEnvelope::new(0, json!([1, "two"]), true)) },
            number,
        )
        .await;

        match result {
            Err(ApiError::Conversion { resource, .. }) => assert_eq!(resource, "Number"),
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_next_page_is_lazy_and_stops_after_error() {
        let calls = RefCell::new(0);
        let mut pager = Pager::new(
            "Number",
            |cursor: PageCursor| {
                *calls.borrow_mut() += 1;
                let envelope = if cursor.offset == 0 {
                    ResponseEnvelope::new(0, json!([1]), true)
                } else {
                    ResponseEnvelope::new(1000, json!({}), true)
                };
                async move { Ok(envelope) }
            },
            number,
        );

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(pager.next_page().await.unwrap().unwrap(), vec![1]);
        assert_eq!(pager.cursor().offset, 50);
        assert!(!pager.is_done());

        assert!(pager.next_page().await.unwrap().is_err());
        assert!(pager.is_done());
        assert!(pager.next_page().await.is_none());
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(pager.pages_fetched(), 2);
    }

    #[tokio::test]
    async fn test_dropping_pager_stops_listing() {
        let calls = RefCell::new(0);
        {
            let mut pager = Pager::new(
                "Number",
                |_| {
                    *calls.borrow_mut() += 1;
                    async { Ok(ResponseEnvelope::new(0, json!([1]), true)) }
                },
                number,
            );
            pager.next_page().await;
        }
        assert_eq!(*calls.borrow(), 1);
    }
}
