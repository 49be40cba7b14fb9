//! Order endpoints.
//!
//! Actions that take an [`Order`] use its `order_id` and fail with
//! [`ApiError::MissingKey`] when it is not set.

use chrono::NaiveDateTime;

use crate::api::client::required_key;
use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};
use crate::models::{Address, Order, RefundReason, Tracker};

/// Timestamp format of the `since` filter.
const SINCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn since_params(since: Option<NaiveDateTime>) -> RequestParams {
    let mut params = RequestParams::new();
    params.insert_opt("since", since.map(|t| t.format(SINCE_FORMAT).to_string()));
    params
}

fn order_id(order: &Order) -> Result<&str, ApiError> {
    required_key("Order", "order_id", order.order_id.as_deref())
}

fn model_params(
    resource: &'static str,
    params: Result<RequestParams, serde_json::Error>,
    id: &str,
) -> Result<RequestParams, ApiError> {
    params
        .map(|params| params.with("id", id))
        .map_err(|source| ApiError::Conversion { resource, source })
}

impl<T: Transport> WishClient<T> {
    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not an order.
    pub async fn get_order_by_id(&self, id: &str) -> Result<Order, ApiError> {
        self.get_model(HttpMethod::Get, "order", RequestParams::new().with("id", id))
            .await
    }

    /// Lists every order changed after `since`, or all orders.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`]; no partial list is returned.
    pub async fn get_all_changed_orders_since(
        &self,
        since: Option<NaiveDateTime>,
    ) -> Result<Vec<Order>, ApiError> {
        self.get_all("order/multi-get", since_params(since)).await
    }

    /// Lists every order awaiting fulfillment, optionally only those
    /// released after `since`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`]; no partial list is returned.
    pub async fn get_all_unfulfilled_orders_since(
        &self,
        since: Option<NaiveDateTime>,
    ) -> Result<Vec<Order>, ApiError> {
        self.get_all("order/get-fulfill", since_params(since)).await
    }

    /// Marks an order as shipped.
    ///
    /// An order that was already fulfilled yields a service failure for
    /// which [`ApiError::is_order_already_fulfilled`] is `true`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn fulfill_order(&self, order: &Order, tracker: &Tracker) -> Result<(), ApiError> {
        self.fulfill_order_by_id(order_id(order)?, tracker).await
    }

    /// Marks the order with the given id as shipped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn fulfill_order_by_id(&self, id: &str, tracker: &Tracker) -> Result<(), ApiError> {
        let params = model_params("Tracker", tracker.to_params(), id)?;
        self.send(HttpMethod::Post, "order/fulfill-one", params).await
    }

    /// Refunds and cancels an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn refund_order(
        &self,
        order: &Order,
        reason: RefundReason,
        note: Option<&str>,
    ) -> Result<(), ApiError> {
        self.refund_order_by_id(order_id(order)?, reason, note).await
    }

    /// Refunds and cancels the order with the given id.
    ///
    /// `note` is only sent when non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn refund_order_by_id(
        &self,
        id: &str,
        reason: RefundReason,
        note: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut params = RequestParams::new()
            .with("id", id)
            .with("reason_code", reason.code());
        params.insert_opt("reason_note", note.filter(|n| !n.is_empty()));

        self.send(HttpMethod::Post, "order/refund", params).await
    }

    /// Replaces the tracking details of a shipped order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_tracking_info(
        &self,
        order: &Order,
        tracker: &Tracker,
    ) -> Result<(), ApiError> {
        self.update_tracking_info_by_id(order_id(order)?, tracker)
            .await
    }

    /// Replaces the tracking details of the order with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_tracking_info_by_id(
        &self,
        id: &str,
        tracker: &Tracker,
    ) -> Result<(), ApiError> {
        let params = model_params("Tracker", tracker.to_params(), id)?;
        self.send(HttpMethod::Post, "order/modify-tracking", params)
            .await
    }

    /// Changes where an order ships to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_shipping_info(
        &self,
        order: &Order,
        address: &Address,
    ) -> Result<(), ApiError> {
        self.update_shipping_info_by_id(order_id(order)?, address)
            .await
    }

    /// Changes where the order with the given id ships to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_shipping_info_by_id(
        &self,
        id: &str,
        address: &Address,
    ) -> Result<(), ApiError> {
        let params = model_params("Address", address.to_params(), id)?;
        self.send(HttpMethod::Post, "order/change-shipping", params)
            .await
    }
}
