//! Customer support ticket endpoints.

use crate::api::errors::ApiError;
use crate::api::WishClient;
use crate::clients::{HttpMethod, RequestParams, Transport};
use crate::models::Ticket;

impl<T: Transport> WishClient<T> {
    /// Fetches a ticket by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails or the payload is not a ticket.
    pub async fn get_ticket_by_id(&self, id: &str) -> Result<Ticket, ApiError> {
        self.get_model(HttpMethod::Get, "ticket", RequestParams::new().with("id", id))
            .await
    }

    /// Lists every ticket awaiting a response from the merchant.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`]; no partial list is returned.
    pub async fn get_all_action_required_tickets(&self) -> Result<Vec<Ticket>, ApiError> {
        self.get_all("ticket/get-action-required", RequestParams::new())
            .await
    }

    /// Replies to a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn reply_to_ticket_by_id(&self, id: &str, reply: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "ticket/reply",
            RequestParams::new().with("id", id).with("reply", reply),
        )
        .await
    }

    /// Closes a ticket.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn close_ticket_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.send(HttpMethod::Post, "ticket/close", RequestParams::new().with("id", id))
            .await
    }

    /// Escalates a ticket to Wish support.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn appeal_ticket_by_id(&self, id: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "ticket/appeal-to-wish-support",
            RequestParams::new().with("id", id),
        )
        .await
    }

    /// Reopens a closed ticket with a reply.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn reopen_ticket_by_id(&self, id: &str, reply: &str) -> Result<(), ApiError> {
        self.send(
            HttpMethod::Post,
            "ticket/re-open",
            RequestParams::new().with("id", id).with("reply", reply),
        )
        .await
    }
}
