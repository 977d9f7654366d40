//! Payment provider port for inbound payment notifications.
//!
//! Defines the contract for authenticating webhook deliveries from the
//! payment gateway (Stripe). Implementations own the signing secret and any
//! account-level policy such as rejecting test-mode events in production.

use async_trait::async_trait;

use crate::domain::checkout::{StripeEvent, WebhookError};

/// Port for payment provider integrations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Verify a webhook signature and parse the event.
    ///
    /// Returns the parsed event if valid. Every failure is an
    /// authentication-kind [`WebhookError`].
    async fn verify_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<StripeEvent, WebhookError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::StripeEventBuilder;

    struct AcceptingProvider;

    #[async_trait]
    impl PaymentProvider for AcceptingProvider {
        async fn verify_webhook(
            &self,
            _payload: &[u8],
            signature: &str,
        ) -> Result<StripeEvent, WebhookError> {
            if signature == "valid" {
                Ok(StripeEventBuilder::new().build())
            } else {
                Err(WebhookError::InvalidSignature)
            }
        }
    }

    #[tokio::test]
    async fn provider_is_object_safe() {
        let provider: std::sync::Arc<dyn PaymentProvider> = std::sync::Arc::new(AcceptingProvider);

        assert!(provider.verify_webhook(b"{}", "valid").await.is_ok());
        assert!(matches!(
            provider.verify_webhook(b"{}", "forged").await,
            Err(WebhookError::InvalidSignature)
        ));
    }
}
