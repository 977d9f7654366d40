//! Payment configuration

use serde::Deserialize;
use std::fmt;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Clone, Default, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key; only its prefix is used, to tell live from test
    pub stripe_api_key: String,

    /// Stripe webhook signing secret
    pub stripe_webhook_secret: String,
}

/// Which Stripe environment the API key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripeMode {
    Test,
    Live,
    /// Restricted or otherwise unrecognized key.
    Other,
}

impl PaymentConfig {
    /// Stripe environment inferred from the key prefix
    pub fn mode(&self) -> StripeMode {
        if self.stripe_api_key.starts_with("sk_live_") {
            StripeMode::Live
        } else if self.stripe_api_key.starts_with("sk_test_") {
            StripeMode::Test
        } else {
            StripeMode::Other
        }
    }

    /// Live deployments must reject test-mode events
    pub fn require_livemode(&self) -> bool {
        self.mode() == StripeMode::Live
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }
        if self.stripe_webhook_secret.is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"));
        }
        if !self.stripe_api_key.starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }
        if !self.stripe_webhook_secret.starts_with("whsec_") {
            return Err(ValidationError::InvalidStripeWebhookSecret);
        }
        Ok(())
    }
}

impl fmt::Debug for PaymentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentConfig")
            .field("mode", &self.mode())
            .field("stripe_api_key", &"[REDACTED]")
            .field("stripe_webhook_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str, secret: &str) -> PaymentConfig {
        PaymentConfig {
            stripe_api_key: api_key.to_string(),
            stripe_webhook_secret: secret.to_string(),
        }
    }

    #[test]
    fn test_mode_from_key_prefix() {
        assert_eq!(config("sk_test_xxx", "whsec_xxx").mode(), StripeMode::Test);
        assert_eq!(config("sk_live_xxx", "whsec_xxx").mode(), StripeMode::Live);
        assert_eq!(config("rk_live_xxx", "whsec_xxx").mode(), StripeMode::Other);
    }

    #[test]
    fn test_only_live_keys_require_livemode() {
        assert!(config("sk_live_xxx", "whsec_xxx").require_livemode());
        assert!(!config("sk_test_xxx", "whsec_xxx").require_livemode());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", config("sk_live_abc", "whsec_def"));
        assert!(!rendered.contains("abc"));
        assert!(!rendered.contains("def"));
        assert!(rendered.contains("Live"));
    }

    #[test]
    fn test_validation_missing_api_key() {
        assert_eq!(
            PaymentConfig::default().validate(),
            Err(ValidationError::MissingRequired("STRIPE_API_KEY"))
        );
    }

    #[test]
    fn test_validation_missing_webhook_secret() {
        assert_eq!(
            config("sk_test_xxx", "").validate(),
            Err(ValidationError::MissingRequired("STRIPE_WEBHOOK_SECRET"))
        );
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        assert_eq!(
            config("pk_test_xxx", "whsec_xxx").validate(),
            Err(ValidationError::InvalidStripeKey)
        );
    }

    #[test]
    fn test_validation_invalid_webhook_secret_prefix() {
        assert_eq!(
            config("sk_test_xxx", "secret_xxx").validate(),
            Err(ValidationError::InvalidStripeWebhookSecret)
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config("sk_test_abcd1234", "whsec_xyz789").validate().is_ok());
    }
}
