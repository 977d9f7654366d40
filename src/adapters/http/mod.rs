//! HTTP adapters - REST API implementations.

pub mod layers;
pub mod webhooks;

pub use layers::with_service_layers;
pub use webhooks::{app_router, WebhookAppState};
