//! Stripe webhook event types.
//!
//! Only the envelope is typed here; the event object stays opaque JSON
//! until a handler asks for a specific view of it.

use serde::{Deserialize, Serialize};

/// Stripe webhook event envelope.
///
/// Serializable so the acknowledgment can echo the event back to Stripe.
/// Fields from Stripe's full event schema that we do not use are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx format).
    pub id: String,

    /// Type of event (e.g., "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Time at which the event was created (Unix timestamp).
    pub created: i64,

    /// Object containing event-specific data.
    pub data: StripeEventData,

    /// Whether this is a live mode event (vs test mode).
    pub livemode: bool,

    /// API version used to render this event. Null for events rendered
    /// with an account's default version on older accounts.
    #[serde(default)]
    pub api_version: Option<String>,

    /// Number of webhooks still pending delivery for this event.
    #[serde(default)]
    pub pending_webhooks: i64,
}

/// Container for event-specific data.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event (polymorphic based on event type).
    pub object: serde_json::Value,

    /// Previous values for updated attributes (only for update events).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_attributes: Option<serde_json::Value>,
}

impl StripeEvent {
    /// Returns true if this is a test mode event.
    pub fn is_test(&self) -> bool {
        !self.livemode
    }

    /// Attempts to deserialize the data object as the specified type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }

    /// Parse the event type into a known enum variant.
    pub fn parsed_type(&self) -> StripeEventType {
        StripeEventType::parse(&self.event_type)
    }
}

/// Stripe event types this service distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeEventType {
    /// Checkout session completed successfully.
    CheckoutSessionCompleted,
    /// Any other event type; acknowledged without side effects.
    Unknown,
}

impl StripeEventType {
    /// Parse event type from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            _ => Self::Unknown,
        }
    }
}

/// Builder for creating test StripeEvent instances.
#[cfg(test)]
pub struct StripeEventBuilder {
    id: String,
    event_type: String,
    created: i64,
    object: serde_json::Value,
    livemode: bool,
    api_version: Option<String>,
}

#[cfg(test)]
impl Default for StripeEventBuilder {
    fn default() -> Self {
        Self {
            id: "evt_test_123".to_string(),
            event_type: "checkout.session.completed".to_string(),
            created: chrono::Utc::now().timestamp(),
            object: serde_json::json!({}),
            livemode: false,
            api_version: Some("2024-04-10".to_string()),
        }
    }
}

#[cfg(test)]
impl StripeEventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn object(mut self, object: serde_json::Value) -> Self {
        self.object = object;
        self
    }

    pub fn livemode(mut self, livemode: bool) -> Self {
        self.livemode = livemode;
        self
    }

    pub fn build(self) -> StripeEvent {
        StripeEvent {
            id: self.id,
            event_type: self.event_type,
            created: self.created,
            data: StripeEventData {
                object: self.object,
                previous_attributes: None,
            },
            livemode: self.livemode,
            api_version: self.api_version,
            pending_webhooks: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ══════════════════════════════════════════════════════════════
    // StripeEvent Deserialization Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn deserialize_minimal_event() {
        let json = r#"{
            "id": "evt_1234567890",
            "type": "checkout.session.completed",
            "created": 1720526400,
            "data": {
                "object": {}
            },
            "livemode": false,
            "api_version": "2024-04-10"
        }"#;

        let event: StripeEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "evt_1234567890");
        assert_eq!(event.event_type, "checkout.session.completed");
        assert_eq!(event.created, 1720526400);
        assert!(!event.livemode);
        assert_eq!(event.api_version.as_deref(), Some("2024-04-10"));
        assert_eq!(event.pending_webhooks, 0);
    }

    #[test]
    fn deserialize_event_with_null_api_version() {
        let json = r#"{
            "id": "evt_old",
            "type": "charge.succeeded",
            "created": 1720526400,
            "data": {"object": {"id": "ch_1"}},
            "livemode": true,
            "api_version": null,
            "pending_webhooks": 2
        }"#;

        let event: StripeEvent = serde_json::from_str(json).unwrap();

        assert!(event.api_version.is_none());
        assert_eq!(event.pending_webhooks, 2);
        assert!(!event.is_test());
    }

    #[test]
    fn deserialize_event_missing_data_fails() {
        let json = r#"{"id": "evt_1", "type": "x", "created": 1, "livemode": false}"#;

        let result: Result<StripeEvent, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn serialized_event_keeps_stripe_field_names() {
        let event = StripeEventBuilder::new().id("evt_echo").build();

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["id"], "evt_echo");
        assert_eq!(value["type"], "checkout.session.completed");
        assert!(value["data"].get("previous_attributes").is_none());
    }

    // ══════════════════════════════════════════════════════════════
    // StripeEvent Method Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn is_test_returns_true_for_test_mode() {
        let event = StripeEventBuilder::new().livemode(false).build();
        assert!(event.is_test());
    }

    #[test]
    fn deserialize_object_to_custom_type() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Session {
            id: String,
            customer: String,
        }

        let event = StripeEventBuilder::new()
            .object(json!({
                "id": "cs_test_abc123",
                "customer": "cus_xyz789"
            }))
            .build();

        let session: Session = event.deserialize_object().unwrap();
        assert_eq!(session.id, "cs_test_abc123");
        assert_eq!(session.customer, "cus_xyz789");
    }

    // ══════════════════════════════════════════════════════════════
    // StripeEventType Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn event_type_parse_checkout_completed() {
        assert_eq!(
            StripeEventType::parse("checkout.session.completed"),
            StripeEventType::CheckoutSessionCompleted
        );
    }

    #[test]
    fn event_type_parse_other_is_unknown() {
        for s in ["payment_intent.succeeded", "checkout.session.expired", ""] {
            assert_eq!(StripeEventType::parse(s), StripeEventType::Unknown);
        }
    }

    #[test]
    fn parsed_type_returns_correct_variant() {
        let event = StripeEventBuilder::new()
            .event_type("invoice.payment_failed")
            .build();

        assert_eq!(event.parsed_type(), StripeEventType::Unknown);
    }
}
