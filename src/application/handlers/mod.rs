//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod order;

pub use order::{
    HandlePaymentWebhookCommand, HandlePaymentWebhookHandler, HandlePaymentWebhookResult,
    WebhookAction,
};
