//! Product variation resources.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RequestParams;
use crate::models::serde_helpers::{lenient_bool, lenient_string};
use crate::models::WishModel;

/// One purchasable variation (size, color...) of a product.
///
/// Wish wraps these records as `{"Variant": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariation {
    /// The variation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the parent product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The merchant's SKU for this variation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Units in stock.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory: Option<String>,
    /// Price in USD.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    /// Shipping price in USD.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping: Option<String>,
    /// Whether the variation is for sale.
    #[serde(
        default,
        deserialize_with = "lenient_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,
    /// Manufacturer's suggested retail price.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub msrp: Option<String>,
    /// Shipping time range in days, e.g. "5-10".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_time: Option<String>,
    /// URL of the variation's main image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductVariation {
    /// The fields sent by `variant/update`.
    pub const UPDATE_FIELDS: &'static [&'static str] = &[
        "sku",
        "inventory",
        "price",
        "enabled",
        "size",
        "color",
        "msrp",
        "shipping_time",
        "main_image",
    ];

    /// Returns the `variant/update` parameters for this variation.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the variation cannot be serialized.
    pub fn update_params(&self) -> Result<RequestParams, serde_json::Error> {
        self.pick_params(Self::UPDATE_FIELDS)
    }
}

impl WishModel for ProductVariation {
    const NAME: &'static str = "Variant";
}

/// A variation to add to an existing product with `variant/add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProductVariation {
    /// SKU of the product the variation belongs to.
    pub parent_sku: String,
    /// SKU of the new variation.
    pub sku: String,
    /// Units in stock.
    pub inventory: u32,
    /// Price in USD.
    pub price: String,
    /// Shipping price in USD.
    pub shipping: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Manufacturer's suggested retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msrp: Option<String>,
    /// Shipping time range in days, e.g. "5-10".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_time: Option<String>,
    /// URL of the variation's main image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
}
