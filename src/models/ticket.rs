//! Customer support tickets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::WishModel;

/// A customer support ticket.
///
/// Wish wraps these records as `{"Ticket": {...}}`. Replies, items and user
/// details vary by ticket type and are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Ticket state, e.g. "Awaiting your response".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<String>,
    #[serde(rename = "UserInfo", default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Value>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WishModel for Ticket {
    const NAME: &'static str = "Ticket";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticket_from_wrapped_record() {
        let ticket = Ticket::from_record(json!({
            "Ticket": {
                "id": "t1",
                "subject": "Where is my order?",
                "UserInfo": {"name": "Ada"},
                "replies": [{"Reply": {"message": "hi"}}],
                "photo_proof": "False"
            }
        }))
        .unwrap();

        assert_eq!(ticket.id.as_deref(), Some("t1"));
        assert_eq!(ticket.user_info, Some(json!({"name": "Ada"})));
        assert!(ticket.replies.is_some());
        assert_eq!(ticket.extra.get("photo_proof"), Some(&json!("False")));
    }
}
