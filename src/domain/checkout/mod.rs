//! Checkout module - Stripe checkout events and their verification.
//!
//! Covers the path from a signed webhook payload to a validated
//! [`CheckoutCompleted`] that the application layer can act on.

mod checkout_session;
mod completed;
mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use checkout_session::{
    StripeAddress, StripeCheckoutSession, StripeCustomerDetails, StripeShipping,
};
pub use completed::{CheckoutCompleted, ORDER_ID_METADATA_KEY, USER_ID_METADATA_KEY};
pub use stripe_event::{StripeEvent, StripeEventData, StripeEventType};
pub use webhook_errors::{WebhookError, WebhookErrorKind};
pub use webhook_verifier::{SignatureHeader, StripeWebhookVerifier};

#[cfg(test)]
pub use stripe_event::StripeEventBuilder;
#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
