//! Typed view of a Stripe Checkout Session as it arrives in
//! `checkout.session.completed` payloads.
//!
//! Every field the storefront relies on is optional here. Presence is
//! checked later, when the session is turned into a [`CheckoutCompleted`].
//!
//! [`CheckoutCompleted`]: super::CheckoutCompleted

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Stripe Checkout Session (subset).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StripeCheckoutSession {
    /// Unique session identifier (cs_...).
    pub id: String,

    /// Custom metadata attached when the session was created.
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,

    /// Details collected from the customer during checkout.
    #[serde(default)]
    pub customer_details: Option<StripeCustomerDetails>,

    /// Shipping details (API versions before 2023-08-16).
    #[serde(default)]
    pub shipping: Option<StripeShipping>,

    /// Shipping details (API versions from 2023-08-16).
    #[serde(default)]
    pub shipping_details: Option<StripeShipping>,

    /// Session payment status (paid, unpaid, no_payment_required).
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// Customer details collected at checkout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StripeCustomerDetails {
    pub email: Option<String>,
    pub name: Option<String>,
    pub address: Option<StripeAddress>,
}

/// Shipping block: recipient name and address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StripeShipping {
    pub name: Option<String>,
    pub address: Option<StripeAddress>,
}

/// Stripe address object. Stripe sends every component as nullable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StripeAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

impl StripeCheckoutSession {
    /// Looks up a metadata value, treating an empty string as absent.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Returns whichever shipping block the API version populated.
    pub fn shipping(&self) -> Option<&StripeShipping> {
        self.shipping.as_ref().or(self.shipping_details.as_ref())
    }

    /// True when Stripe reports the session as paid.
    pub fn is_paid(&self) -> bool {
        self.payment_status.as_deref() == Some("paid")
    }
}
