//! Product variation endpoints.
//!
//! Variations are addressed by SKU rather than by id.

use crate::api::client::required_key;
use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};
use crate::models::{to_params, NewProductVariation, ProductVariation};

fn variation_sku(variation: &ProductVariation) -> Result<&str, ApiError> {
    required_key("Variant", "sku", variation.sku.as_deref())
}

impl<T: Transport> WishClient<T> {
    /// Adds a variation to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a
    /// variation.
    pub async fn create_product_variation(
        &self,
        variation: &NewProductVariation,
    ) -> Result<ProductVariation, ApiError> {
        let params = to_params(variation).map_err(|source| ApiError::Conversion {
            resource: "NewProductVariation",
            source,
        })?;
        self.get_model(HttpMethod::Post, "variant/add", params).await
    }

    /// Fetches a variation by SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a
    /// variation.
    pub async fn get_product_variation_by_sku(
        &self,
        sku: &str,
    ) -> Result<ProductVariation, ApiError> {
        self.get_model(HttpMethod::Get, "variant", RequestParams::new().with("sku", sku))
            .await
    }

    /// Updates a variation's stock, price and attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_product_variation(
        &self,
        variation: &ProductVariation,
    ) -> Result<(), ApiError> {
        variation_sku(variation)?;
        let params = variation
            .update_params()
            .map_err(|source| ApiError::Conversion {
                resource: "Variant",
                source,
            })?;
        self.send(HttpMethod::Post, "variant/update", params).await
    }

    /// Renames a variation's SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn change_product_variation_sku(
        &self,
        sku: &str,
        new_sku: &str,
    ) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "variant/change-sku",
            RequestParams::new().with("sku", sku).with("new_sku", new_sku),
        )
        .await
    }

    /// Enables a variation for sale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn enable_product_variation(
        &self,
        variation: &ProductVariation,
    ) -> Result<(), ApiError> {
        self.enable_product_variation_by_sku(variation_sku(variation)?)
            .await
    }

    /// Enables the variation with the given SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn enable_product_variation_by_sku(&self, sku: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, "variant/enable", RequestParams::new().with("sku", sku))
            .await
    }

    /// Disables a variation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn disable_product_variation(
        &self,
        variation: &ProductVariation,
    ) -> Result<(), ApiError> {
        self.disable_product_variation_by_sku(variation_sku(variation)?)
            .await
    }

    /// Disables the variation with the given SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn disable_product_variation_by_sku(&self, sku: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, "variant/disable", RequestParams::new().with("sku", sku))
            .await
    }

    /// Sets the stock of the variation with the given SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_inventory_by_sku(&self, sku: &str, inventory: u32) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "variant/update-inventory",
            RequestParams::new().with("sku", sku).with("inventory", inventory),
        )
        .await
    }

    /// Lists every variation of every product.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`]; no partial list is returned.
    pub async fn get_all_product_variations(&self) -> Result<Vec<ProductVariation>, ApiError> {
        self.get_all("variant/multi-get", RequestParams::new()).await
    }
}
