//! The Wish API surface.
//!
//! This module contains [`WishClient`] and the two pieces of logic every
//! call goes through:
//!
//! - [`classify`]: maps the envelope's service code to success or a
//!   [`ServiceFailure`]
//! - [`Pager`]: walks offset-paginated listings page by page
//!
//! Endpoint methods are grouped by resource in private submodules and are
//! all available directly on [`WishClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use wish_api::{WishClient, WishConfig, AccessToken};
//! use wish_api::models::Tracker;
//!
//! let config = WishConfig::builder()
//!     .access_token(AccessToken::new("your-access-token")?)
//!     .build()?;
//! let client = WishClient::new(&config);
//!
//! let tracker = Tracker::new("USPS").tracking_number("9400110200881234567890");
//! for order in client.get_all_unfulfilled_orders_since(None).await? {
//!     match client.fulfill_order(&order, &tracker).await {
//!         Err(e) if e.is_order_already_fulfilled() => {}
//!         other => other?,
//!     }
//! }
//! ```

mod classify;
mod client;
mod download_jobs;
mod errors;
mod notifications;
mod orders;
mod pager;
mod products;
mod tickets;
mod variations;

pub use classify::{check_envelope, classify, FAILURE_PRIORITY, SUCCESS_CODE};
pub use client::{PageFuture, WishClient};
pub use errors::{ApiError, ConflictKind, ServiceFailure, UnauthorizedReason};
pub use pager::{fetch_all, PageCursor, Pager, RecordFactory, PAGE_SIZE};
