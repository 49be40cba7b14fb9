//! Product resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RequestParams;
use crate::models::serde_helpers::{lenient_string, wrapped_list};
use crate::models::variation::ProductVariation;
use crate::models::WishModel;

/// A product tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The tag text.
    pub name: String,
}

/// A product listed by the merchant.
///
/// Variations arrive nested under `variants`; `tags` is a list of [`Tag`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The merchant's SKU for the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_sku: Option<String>,
    /// Search tags.
    #[serde(default, deserialize_with = "wrapped_list", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// The brand name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// The product's landing page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    /// The product's UPC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// URL of the main image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    /// URLs of the extra images, separated by `|`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_images: Option<String>,
    /// Number of users who saved the product.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_saves: Option<String>,
    /// Number of units sold.
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub number_sold: Option<String>,
    /// Review state, e.g. "approved".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<String>,
    /// Upload date as sent by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_uploaded: Option<String>,
    /// The product's variations.
    #[serde(default, deserialize_with = "wrapped_list", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ProductVariation>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// The fields sent by `product/update`.
    pub const UPDATE_FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "brand",
        "landing_page_url",
        "upc",
        "main_image",
        "extra_images",
    ];

    /// Returns the tag names, comma separated as the API expects them.
    #[must_use]
    pub fn tag_list(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        Some(
            self.tags
                .iter()
                .map(|tag| tag.name.as_str())
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Returns the `product/update` parameters for this product.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the product cannot be serialized.
    pub fn update_params(&self) -> Result<RequestParams, serde_json::Error> {
        let mut params = self.pick_params(Self::UPDATE_FIELDS)?;
        params.insert_opt("tags", self.tag_list());
        Ok(params)
    }
}

impl WishModel for Product {
    const NAME: &'static str = "Product";
}

/// A product to create with `product/add`.
///
/// The first variation is created together with the product, so the
/// variation fields (`sku`, `inventory`, `price`, `shipping`) are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProduct {
    /// The product name.
    pub name: String,
    /// The product description.
    pub description: String,
    /// Search tags, sent comma separated.
    pub tags: Vec<String>,
    /// SKU of the first variation.
    pub sku: String,
    /// Units in stock for the first variation.
    pub inventory: u32,
    /// Price in USD.
    pub price: String,
    /// Shipping price in USD.
    pub shipping: String,
    /// URL of the main image.
    pub main_image: String,
    /// The product's SKU; defaults to `sku` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_sku: Option<String>,
    /// Manufacturer's suggested retail price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msrp: Option<String>,
    /// Color of the first variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size of the first variation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// URLs of extra images.
    #[serde(skip_serializing)]
    pub extra_images: Vec<String>,
    /// The brand name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// The product's landing page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    /// The product's UPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    /// Shipping time range in days, e.g. "5-10".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_time: Option<String>,
}

impl NewProduct {
    /// Returns the `product/add` parameters.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the product cannot be serialized.
    pub fn to_params(&self) -> Result<RequestParams, serde_json::Error> {
        let mut params = crate::models::to_params(self)?;
        if !self.extra_images.is_empty() {
            params.insert("extra_images", self.extra_images.join("|"));
        }
        Ok(params)
    }
}

/// Shipping prices for many countries at once, for
/// `product/update-multi-shipping`.
///
/// # Example
///
/// ```rust
/// use wish_api::models::MultiShippingUpdate;
///
/// let update = MultiShippingUpdate::new("p1")
///     .price("US", 10.99)
///     .price("GB", 9.99)
///     .disable("FR");
///
/// let params = update.to_params();
/// assert_eq!(params.get("US").map(|v| v.to_wire()), Some("10.99".to_string()));
/// assert_eq!(params.get("disabled_countries").map(|v| v.to_wire()), Some("FR".to_string()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiShippingUpdate {
    /// The product id.
    pub id: String,
    /// Shipping price per country code.
    pub country_prices: BTreeMap<String, f64>,
    /// Countries the product no longer ships to.
    pub disabled_countries: Vec<String>,
    /// Countries to add to Wish Express.
    pub wish_express_add_countries: Vec<String>,
    /// Countries to remove from Wish Express.
    pub wish_express_remove_countries: Vec<String>,
    /// Warehouse the prices apply to.
    pub warehouse_name: Option<String>,
    /// Price for countries not listed.
    pub default_shipping_price: Option<f64>,
}

impl MultiShippingUpdate {
    /// Creates an empty update for product `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the shipping price for one country.
    #[must_use]
    pub fn price(mut self, country: impl Into<String>, price: f64) -> Self {
        self.country_prices.insert(country.into(), price);
        self
    }

    /// Disables shipping to one country.
    #[must_use]
    pub fn disable(mut self, country: impl Into<String>) -> Self {
        self.disabled_countries.push(country.into());
        self
    }

    /// Returns the request parameters.
    ///
    /// Empty lists and an empty warehouse name are left out.
    #[must_use]
    pub fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new().with("id", self.id.as_str());

        for (country, price) in &self.country_prices {
            params.insert(country.as_str(), *price);
        }
        for (name, countries) in [
            ("disabled_countries", &self.disabled_countries),
            ("wish_express_add_countries", &self.wish_express_add_countries),
            (
                "wish_express_remove_countries",
                &self.wish_express_remove_countries,
            ),
        ] {
            if !countries.is_empty() {
                params.insert(name, countries.as_slice());
            }
        }
        if let Some(warehouse) = self.warehouse_name.as_deref().filter(|w| !w.is_empty()) {
            params.insert("warehouse_name", warehouse);
        }
        params.insert_opt("default_shipping_price", self.default_shipping_price);

        params
    }
}
