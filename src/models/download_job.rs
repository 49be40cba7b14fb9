//! Bulk download jobs for products and orders.
//!
//! A download job exports a whole catalog or order history to a CSV file
//! that the service prepares in the background. Create a job, poll its
//! status until `download_link` is set, then fetch the file.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::RequestParams;
use crate::models::serde_helpers::lenient_string;
use crate::models::{to_params, WishModel};

/// Timestamp format the job endpoints accept.
const JOB_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sort order of exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

fn serialize_time<S: Serializer>(
    time: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.serialize_str(&time.format(JOB_TIME_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// Options for `product/create-download-job`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductDownloadJobParams {
    /// Only export products updated after this time.
    #[serde(serialize_with = "serialize_time", skip_serializing_if = "Option::is_none")]
    pub since: Option<NaiveDateTime>,
    /// Maximum number of products to export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Only export products stocked in this warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
}

impl ProductDownloadJobParams {
    /// Returns the set options as request parameters.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the options cannot be serialized.
    pub fn to_params(&self) -> Result<RequestParams, serde_json::Error> {
        to_params(self)
    }
}

/// Options for `order/create-download-job`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderDownloadJobParams {
    /// Only export orders released after this time.
    #[serde(serialize_with = "serialize_time", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    /// Only export orders released before this time.
    #[serde(serialize_with = "serialize_time", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    /// Maximum number of orders to export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
}

impl OrderDownloadJobParams {
    /// Returns the set options as request parameters.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the options cannot be serialized.
    pub fn to_params(&self) -> Result<RequestParams, serde_json::Error> {
        to_params(self)
    }
}

/// A newly created download job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadJob {
    /// Id used to poll or cancel the job.
    #[serde(deserialize_with = "lenient_string", default)]
    pub job_id: Option<String>,
}

impl WishModel for DownloadJob {
    const NAME: &'static str = "DownloadJob";
}

/// Progress of a download job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadJobStatus {
    /// Job state, e.g. "PENDING", "RUNNING" or "FINISHED".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_count: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub processed_count: Option<String>,
    /// Where to fetch the export once the job has finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_run_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_run_time: Option<String>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DownloadJobStatus {
    /// Returns `true` once the export can be downloaded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.download_link.as_deref().is_some_and(|link| !link.is_empty())
    }
}

impl WishModel for DownloadJobStatus {
    const NAME: &'static str = "DownloadJobStatus";
}
