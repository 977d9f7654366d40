//! HTTP handlers for webhook endpoints.
//!
//! These handlers connect Axum routes to the payment webhook command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::{HandlePaymentWebhookCommand, HandlePaymentWebhookHandler};
use crate::domain::checkout::{WebhookError, WebhookErrorKind};
use crate::ports::{EmailSender, OrderRepository, PaymentProvider};

use super::dto::{
    HealthResponse, WebhookAckResponse, WebhookFailureResponse, GENERIC_FAILURE_MESSAGE,
    INVALID_SIGNATURE_MESSAGE,
};

/// Header Stripe signs deliveries with.
pub const STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for webhook routes. Cloned per request.
#[derive(Clone)]
pub struct WebhookAppState {
    pub payment_provider: Arc<dyn PaymentProvider>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub email_sender: Arc<dyn EmailSender>,
    /// Sender for confirmation emails, e.g. `CaseCobra <orders@casecobra.com>`.
    pub email_from: String,
}

impl WebhookAppState {
    pub fn webhook_handler(&self) -> HandlePaymentWebhookHandler {
        HandlePaymentWebhookHandler::new(
            self.payment_provider.clone(),
            self.order_repository.clone(),
            self.email_sender.clone(),
            self.email_from.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks - Handle Stripe webhooks
///
/// The body is taken as raw bytes; the signature covers them exactly.
pub async fn handle_stripe_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    let signature = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let handler = state.webhook_handler();
    let cmd = HandlePaymentWebhookCommand {
        payload: body.to_vec(),
        signature,
    };

    let result = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(WebhookAckResponse::new(result.event))))
}

/// GET /health - Liveness probe. Does not check dependencies.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(pub WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();

        let message = match self.0.kind() {
            WebhookErrorKind::Authentication => {
                tracing::warn!(error = %self.0, "Rejected webhook delivery");
                INVALID_SIGNATURE_MESSAGE
            }
            WebhookErrorKind::Validation | WebhookErrorKind::Dependency => {
                tracing::error!(
                    error = %self.0,
                    retryable = self.0.is_retryable(),
                    "Webhook processing failed"
                );
                GENERIC_FAILURE_MESSAGE
            }
        };

        (status, Json(WebhookFailureResponse::new(message))).into_response()
    }
}
