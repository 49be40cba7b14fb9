//! Notification, announcement and infraction endpoints.
//!
//! These payloads have no stable shape and are returned as raw JSON.

use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};

impl<T: Transport> WishClient<T> {
    /// Returns the unviewed notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_all_notifications(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "noti/fetch-unviewed", RequestParams::new())
            .await
    }

    /// Marks a notification as viewed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn mark_notification_as_viewed(&self, id: &str) -> Result<Value, ApiError> {
        self.get_data(
            HttpMethod::Post,
            "noti/mark-as-viewed",
            RequestParams::new().with("id", id),
        )
        .await
    }

    /// Returns the number of unviewed notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_unviewed_notification_count(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "noti/get-unviewed-count", RequestParams::new())
            .await
    }

    /// Returns the business development announcements.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_bd_announcements(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "fetch-bd-announcement", RequestParams::new())
            .await
    }

    /// Returns the system update notifications.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_system_update_notifications(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "fetch-sys-updates-noti", RequestParams::new())
            .await
    }

    /// Returns the number of open infractions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_infraction_count(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "count/infractions", RequestParams::new())
            .await
    }

    /// Returns links to the open infractions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_infraction_links(&self) -> Result<Value, ApiError> {
        self.get_data(HttpMethod::Get, "get/infractions", RequestParams::new())
            .await
    }
}
