//! Product endpoints.

use serde_json::Value;

use crate::api::client::required_key;
use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};
use crate::models::{MultiShippingUpdate, NewProduct, Product};

fn product_id(product: &Product) -> Result<&str, ApiError> {
    required_key("Product", "id", product.id.as_deref())
}

impl<T: Transport> WishClient<T> {
    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a product.
    pub async fn get_product_by_id(&self, id: &str) -> Result<Product, ApiError> {
        self.get_model(HttpMethod::Get, "product", RequestParams::new().with("id", id))
            .await
    }

    /// Fetches a product by its parent SKU.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a product.
    pub async fn get_product_by_parent_sku(&self, parent_sku: &str) -> Result<Product, ApiError> {
        self.get_model(
            HttpMethod::Get,
            "product",
            RequestParams::new().with("parent_sku", parent_sku),
        )
        .await
    }

    /// Creates a product together with its first variation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a product.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let params = product.to_params().map_err(|source| ApiError::Conversion {
            resource: "NewProduct",
            source,
        })?;
        self.get_model(HttpMethod::Post, "product/add", params).await
    }

    /// Updates a product's listing details.
    ///
    /// Sends the product's id, name, description, tags, brand, landing page,
    /// UPC and images, each only when set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_product(&self, product: &Product) -> Result<(), ApiError> {
        product_id(product)?;
        let params = product
            .update_params()
            .map_err(|source| ApiError::Conversion {
                resource: "Product",
                source,
            })?;
        self.send(HttpMethod::Post, "product/update", params).await
    }

    /// Enables a product for sale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn enable_product(&self, product: &Product) -> Result<(), ApiError> {
        self.enable_product_by_id(product_id(product)?)
            .await
    }

    /// Enables the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn enable_product_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, "product/enable", RequestParams::new().with("id", id))
            .await
    }

    /// Disables a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn disable_product(&self, product: &Product) -> Result<(), ApiError> {
        self.disable_product_by_id(product_id(product)?)
            .await
    }

    /// Disables the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn disable_product_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, "product/disable", RequestParams::new().with("id", id))
            .await
    }

    /// Lists every product of the merchant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`]; no partial list is returned.
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_all("product/multi-get", RequestParams::new()).await
    }

    /// Removes all extra images from a product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn remove_extra_images(&self, product: &Product) -> Result<(), ApiError> {
        self.remove_extra_images_by_id(product_id(product)?)
            .await
    }

    /// Removes all extra images from the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn remove_extra_images_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "product/remove-extra-images",
            RequestParams::new().with("id", id),
        )
        .await
    }

    /// Sets the shipping price of a product for one country.
    ///
    /// `wish_express` is only sent when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_shipping_by_id(
        &self,
        id: &str,
        country: &str,
        price: f64,
        wish_express: Option<bool>,
    ) -> Result<(), ApiError> {
        let mut params = RequestParams::new()
            .with("id", id)
            .with("country", country)
            .with("price", price);
        params.insert_opt("wish_express", wish_express);

        self.send(HttpMethod::Post, "product/update-shipping", params)
            .await
    }

    /// Sets shipping prices for many countries at once.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn update_multi_shipping_by_id(
        &self,
        update: &MultiShippingUpdate,
    ) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "product/update-multi-shipping",
            update.to_params(),
        )
        .await
    }

    /// Returns the shipping settings of a product for one country.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_shipping_by_id(&self, id: &str, country: &str) -> Result<Value, ApiError> {
        self.get_data(
            HttpMethod::Get,
            "product/get-shipping",
            RequestParams::new().with("id", id).with("country", country),
        )
        .await
    }

    /// Returns the shipping settings of a product for every country.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_all_shipping_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.get_data(
            HttpMethod::Get,
            "product/get-all-shipping",
            RequestParams::new().with("id", id),
        )
        .await
    }
}
