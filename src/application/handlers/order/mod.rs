//! Order handlers.
//!
//! ## Commands
//! - Processing payment webhooks (marks orders paid and sends confirmation)

mod handle_payment_webhook;

pub use handle_payment_webhook::{
    HandlePaymentWebhookCommand, HandlePaymentWebhookHandler, HandlePaymentWebhookResult,
    WebhookAction,
};
