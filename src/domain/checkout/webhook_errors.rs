//! Webhook error types for Stripe webhook handling.
//!
//! Defines all error conditions that can occur during webhook processing,
//! grouped into authentication, validation and dependency failures, with
//! HTTP status code mapping and retryability semantics.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Broad category of a webhook failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookErrorKind {
    /// The request could not be proven to come from Stripe.
    Authentication,
    /// The event is authentic but lacks data needed to fulfil the order.
    Validation,
    /// Database or email provider failure.
    Dependency,
}

/// Errors that occur during webhook processing.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No Stripe-Signature header on the request.
    #[error("Missing signature")]
    MissingSignature,

    /// Webhook signature verification failed.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Webhook timestamp is outside the acceptable window (5 minutes).
    #[error("Timestamp out of range")]
    TimestampOutOfRange,

    /// Event timestamp is in the future beyond clock skew tolerance.
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Failed to parse webhook payload or signature header.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Test mode event delivered to a live mode deployment.
    #[error("Test mode event rejected: {0}")]
    LivemodeMismatch(String),

    /// Required field missing from the checkout session.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Required metadata key missing from the checkout session.
    #[error("Missing metadata: {0}")]
    MissingMetadata(&'static str),

    /// Event object could not be read as a checkout session.
    #[error("Malformed checkout session: {0}")]
    MalformedSession(String),

    /// Referenced order could not be found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Email provider rejected or failed to accept the message.
    #[error("Email error: {0}")]
    Email(String),
}

impl WebhookError {
    /// Returns the failure category.
    pub fn kind(&self) -> WebhookErrorKind {
        match self {
            WebhookError::MissingSignature
            | WebhookError::InvalidSignature
            | WebhookError::TimestampOutOfRange
            | WebhookError::InvalidTimestamp
            | WebhookError::ParseError(_)
            | WebhookError::LivemodeMismatch(_) => WebhookErrorKind::Authentication,

            WebhookError::MissingField(_)
            | WebhookError::MissingMetadata(_)
            | WebhookError::MalformedSession(_) => WebhookErrorKind::Validation,

            WebhookError::OrderNotFound(_)
            | WebhookError::Database(_)
            | WebhookError::Email(_) => WebhookErrorKind::Dependency,
        }
    }

    /// Returns true if a later redelivery of the same event may succeed.
    ///
    /// Only dependency failures qualify; Stripe's own retry schedule is the
    /// sole recovery path.
    pub fn is_retryable(&self) -> bool {
        self.kind() == WebhookErrorKind::Dependency
    }

    /// Maps the error to the HTTP status code returned to Stripe.
    ///
    /// - 400: the request failed authentication
    /// - 500: anything else
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            WebhookErrorKind::Authentication => StatusCode::BAD_REQUEST,
            WebhookErrorKind::Validation | WebhookErrorKind::Dependency => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Maps a port failure from the order repository.
    pub fn from_repository(err: DomainError) -> Self {
        match err.code {
            ErrorCode::OrderNotFound => WebhookError::OrderNotFound(err.message),
            _ => WebhookError::Database(err.to_string()),
        }
    }

    /// Maps a port failure from the email sender.
    pub fn from_email(err: DomainError) -> Self {
        WebhookError::Email(err.to_string())
    }
}
