//! HTTP adapter for payment webhooks.
//!
//! - `POST /api/webhooks` - Stripe webhook deliveries (signature verified, no auth)
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{handle_stripe_webhook, health, WebhookApiError, WebhookAppState};
pub use routes::{app_router, webhook_routes};
