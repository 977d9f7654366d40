//! Response bodies for the webhook endpoints.
//!
//! Failure bodies carry a fixed message. The underlying error is only
//! ever logged.

use serde::Serialize;

use crate::domain::checkout::StripeEvent;

/// Message returned for every authentication failure.
pub const INVALID_SIGNATURE_MESSAGE: &str = "Invalid signature";

/// Message returned for every other failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Acknowledgment for an accepted delivery.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAckResponse {
    pub ok: bool,
    /// The verified event, echoed back.
    pub result: StripeEvent,
}

impl WebhookAckResponse {
    pub fn new(event: StripeEvent) -> Self {
        Self {
            ok: true,
            result: event,
        }
    }
}

/// Body for a rejected or failed delivery.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookFailureResponse {
    pub ok: bool,
    pub message: &'static str,
}

impl WebhookFailureResponse {
    pub fn new(message: &'static str) -> Self {
        Self { ok: false, message }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::StripeEventBuilder;

    #[test]
    fn ack_serializes_ok_and_event() {
        let event = StripeEventBuilder::new().id("evt_ack").build();

        let value = serde_json::to_value(WebhookAckResponse::new(event)).unwrap();

        assert_eq!(value["ok"], true);
        assert_eq!(value["result"]["id"], "evt_ack");
        assert_eq!(value["result"]["type"], "checkout.session.completed");
    }

    #[test]
    fn failure_serializes_fixed_message() {
        let value =
            serde_json::to_value(WebhookFailureResponse::new(INVALID_SIGNATURE_MESSAGE)).unwrap();

        assert_eq!(value, serde_json::json!({"ok": false, "message": "Invalid signature"}));
    }
}
