//! Order resources and the inputs of order actions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RequestParams;
use crate::models::serde_helpers::lenient_string;
use crate::models::{to_params, WishModel};

/// A customer's order of one product variation.
///
/// Wish wraps these records as `{"Order": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// The order id, used by every order action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// The id of the customer's whole transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Order state, e.g. "APPROVED" or "SHIPPED".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<String>,
    /// Price per unit in USD.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    /// Amount the merchant receives per unit.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_cost: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_total: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub days_to_fulfill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_date: Option<String>,
    /// Where the order ships to.
    #[serde(
        rename = "ShippingDetail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_detail: Option<Address>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WishModel for Order {
    const NAME: &'static str = "Order";
}

/// Shipment tracking details for fulfilling an order or correcting its
/// tracking.
///
/// # Example
///
/// ```rust
/// use wish_api::models::Tracker;
///
/// let tracker = Tracker::new("USPS").tracking_number("9400110200881234567890");
/// let params = tracker.to_params().unwrap();
///
/// assert!(params.contains("tracking_provider"));
/// assert!(!params.contains("ship_note"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracker {
    /// The carrier, e.g. "USPS" or "ChinaAirPost".
    pub tracking_provider: String,
    /// The carrier's tracking number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    /// A note to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_note: Option<String>,
    /// Two letter code of the country the parcel ships from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_country_code: Option<String>,
}

impl Tracker {
    /// Creates a tracker for `tracking_provider` with nothing else set.
    #[must_use]
    pub fn new(tracking_provider: impl Into<String>) -> Self {
        Self {
            tracking_provider: tracking_provider.into(),
            ..Self::default()
        }
    }

    /// Sets the tracking number.
    #[must_use]
    pub fn tracking_number(mut self, number: impl Into<String>) -> Self {
        self.tracking_number = Some(number.into());
        self
    }

    /// Sets the note to the customer.
    #[must_use]
    pub fn ship_note(mut self, note: impl Into<String>) -> Self {
        self.ship_note = Some(note.into());
        self
    }

    /// Sets the origin country code.
    #[must_use]
    pub fn origin_country_code(mut self, code: impl Into<String>) -> Self {
        self.origin_country_code = Some(code.into());
        self
    }

    /// Returns the set fields as request parameters.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the tracker cannot be serialized.
    pub fn to_params(&self) -> Result<RequestParams, serde_json::Error> {
        to_params(self)
    }
}

/// A shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The recipient's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// Two letter country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
}

impl Address {
    /// Returns the set fields as request parameters.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the address cannot be serialized.
    pub fn to_params(&self) -> Result<RequestParams, serde_json::Error> {
        to_params(self)
    }
}

/// The reason code sent with a refund.
///
/// Use the named constants for the common reasons, or [`RefundReason::new`]
/// for any code the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefundReason(i32);

impl RefundReason {
    /// Other reason; describe it in the refund note.
    pub const OTHER: Self = Self(-1);
    /// The store is unable to fulfill the order.
    pub const STORE_UNABLE_TO_FULFILL: Self = Self(0);
    /// The store ran out of stock.
    pub const STORE_OUT_OF_STOCK: Self = Self(1);
    /// The store cannot ship to the customer's address.
    pub const UNABLE_TO_SHIP: Self = Self(2);
    /// The customer asked for a refund.
    pub const CUSTOMER_REQUESTED: Self = Self(3);

    /// Wraps a raw reason code.
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw reason code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for RefundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
