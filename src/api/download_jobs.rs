//! Bulk download job endpoints.
//!
//! Product and order exports share the same three calls under different
//! prefixes.

use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};
use crate::models::{DownloadJob, DownloadJobStatus, OrderDownloadJobParams, ProductDownloadJobParams};

fn job_params(job_id: &str) -> RequestParams {
    RequestParams::new().with("job_id", job_id)
}

fn option_params(
    resource: &'static str,
    params: Result<RequestParams, serde_json::Error>,
) -> Result<RequestParams, ApiError> {
    params.map_err(|source| ApiError::Conversion { resource, source })
}

impl<T: Transport> WishClient<T> {
    /// Starts an export of the product catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn product_create_download_job(
        &self,
        options: &ProductDownloadJobParams,
    ) -> Result<DownloadJob, ApiError> {
        let params = option_params("ProductDownloadJobParams", options.to_params())?;
        self.get_model(HttpMethod::Post, "product/create-download-job", params)
            .await
    }

    /// Returns the progress of a product export.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn product_get_download_job_status(
        &self,
        job_id: &str,
    ) -> Result<DownloadJobStatus, ApiError> {
        self.get_model(
            HttpMethod::Post,
            "product/get-download-job-status",
            job_params(job_id),
        )
        .await
    }

    /// Cancels a product export.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn product_cancel_download_job(&self, job_id: &str) -> Result<Value, ApiError> {
        self.get_data(
            HttpMethod::Post,
            "product/cancel-download-job",
            job_params(job_id),
        )
        .await
    }

    /// Starts an export of the order history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn order_create_download_job(
        &self,
        options: &OrderDownloadJobParams,
    ) -> Result<DownloadJob, ApiError> {
        let params = option_params("OrderDownloadJobParams", options.to_params())?;
        self.get_model(HttpMethod::Post, "order/create-download-job", params)
            .await
    }

    /// Returns the progress of an order export.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn order_get_download_job_status(
        &self,
        job_id: &str,
    ) -> Result<DownloadJobStatus, ApiError> {
        self.get_model(
            HttpMethod::Post,
            "order/get-download-job-status",
            job_params(job_id),
        )
        .await
    }

    /// Cancels an order export.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn order_cancel_download_job(&self, job_id: &str) -> Result<Value, ApiError> {
        self.get_data(
            HttpMethod::Post,
            "order/cancel-download-job",
            job_params(job_id),
        )
        .await
    }
}
