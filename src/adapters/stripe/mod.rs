//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` port: webhook signature verification
//! and the livemode policy for live deployments.
//!
//! # Security
//!
//! - Webhook signatures use HMAC-SHA256 with constant-time comparison
//! - Timestamps are validated to prevent replay attacks (5-minute window)
//! - The signing secret is held in a `secrecy::SecretString`

mod stripe_adapter;

pub use stripe_adapter::{StripeConfig, StripePaymentAdapter};
