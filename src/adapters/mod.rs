//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `email` - Resend transactional email
//! - `http` - axum routes for webhook delivery
//! - `postgres` - Order persistence
//! - `stripe` - Webhook signature verification

pub mod email;
pub mod http;
pub mod postgres;
pub mod stripe;

pub use email::{ResendConfig, ResendEmailSender};
pub use http::{app_router, with_service_layers, WebhookAppState};
pub use postgres::PostgresOrderRepository;
pub use stripe::{StripeConfig, StripePaymentAdapter};
