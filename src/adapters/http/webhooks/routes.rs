//! Axum router configuration for webhook endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{handle_stripe_webhook, health, WebhookAppState};

/// Create the webhook router.
///
/// Webhooks don't require user authentication; they're verified via signature.
///
/// # Routes
/// - `POST /webhooks` - Handle Stripe webhooks
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new().route("/webhooks", post(handle_stripe_webhook))
}

/// Create the complete application router.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/webhooks`
pub fn app_router(state: WebhookAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", webhook_routes())
        .with_state(state)
}
