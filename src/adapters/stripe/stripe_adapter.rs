//! Stripe payment provider adapter.
//!
//! Implements the `PaymentProvider` trait on top of [`StripeWebhookVerifier`]
//! and applies the account-level livemode policy.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::from(&app_config.payment);
//! let adapter = StripePaymentAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::PaymentConfig;
use crate::domain::checkout::{StripeEvent, StripeWebhookVerifier, WebhookError};
use crate::ports::PaymentProvider;

/// Stripe webhook configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Webhook signing secret (whsec_...).
    webhook_secret: SecretString,

    /// Reject test-mode events. Set for deployments using a live API key.
    require_livemode: bool,
}

impl StripeConfig {
    /// Create a new Stripe configuration.
    pub fn new(webhook_secret: impl Into<String>) -> Self {
        Self {
            webhook_secret: SecretString::new(webhook_secret.into()),
            require_livemode: false,
        }
    }

    /// Require livemode events.
    pub fn with_require_livemode(mut self, require: bool) -> Self {
        self.require_livemode = require;
        self
    }
}

impl From<&PaymentConfig> for StripeConfig {
    fn from(config: &PaymentConfig) -> Self {
        Self::new(config.stripe_webhook_secret.clone())
            .with_require_livemode(config.require_livemode())
    }
}

/// Stripe payment provider adapter.
pub struct StripePaymentAdapter {
    verifier: StripeWebhookVerifier,
    require_livemode: bool,
}

impl StripePaymentAdapter {
    /// Create a new Stripe adapter with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        Self {
            verifier: StripeWebhookVerifier::new(config.webhook_secret.expose_secret().as_str()),
            require_livemode: config.require_livemode,
        }
    }

    fn check_livemode(&self, event: &StripeEvent) -> Result<(), WebhookError> {
        if self.require_livemode && event.is_test() {
            tracing::warn!(event_id = %event.id, "Rejected test mode event in production");
            return Err(WebhookError::LivemodeMismatch(event.id.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentProvider for StripePaymentAdapter {
    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<StripeEvent, WebhookError> {
        let event = self
            .verifier
            .verify_and_parse(payload, signature)
            .map_err(|e| {
                tracing::warn!(error = %e, payload_len = payload.len(), "Webhook verification failed");
                e
            })?;

        self.check_livemode(&event)?;

        Ok(event)
    }
}
