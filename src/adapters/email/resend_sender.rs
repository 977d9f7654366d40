//! Resend email sender - Implementation of EmailSender over Resend's HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key).with_base_url("https://api.resend.com");
//! let sender = ResendEmailSender::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::order_received::render_order_received;
use crate::config::EmailConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{EmailSender, EmailTemplate, OutboundEmail};

/// Configuration for the Resend sender.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&EmailConfig> for ResendConfig {
    fn from(config: &EmailConfig) -> Self {
        Self::new(config.resend_api_key.clone())
            .with_base_url(config.api_base_url.clone())
            .with_timeout(config.request_timeout())
    }
}

/// Resend API request body.
#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: String,
    text: String,
}

/// Resend API success body.
#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: String,
}

/// Email sender backed by Resend.
pub struct ResendEmailSender {
    config: ResendConfig,
    client: Client,
}

impl ResendEmailSender {
    /// Creates a new sender with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_resend_request<'a>(email: &'a OutboundEmail) -> Result<ResendRequest<'a>, DomainError> {
        let rendered = match &email.template {
            EmailTemplate::OrderReceived(data) => render_order_received(data)?,
        };

        Ok(ResendRequest {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html: rendered.html,
            text: rendered.text,
        })
    }

    /// Maps non-success statuses to errors, keeping the provider's message.
    async fn handle_response_status(&self, response: Response) -> Result<Response, DomainError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        let message = match status.as_u16() {
            401 | 403 => "Resend rejected the API key".to_string(),
            422 => format!("Resend rejected the message: {}", error_body),
            429 => "Resend rate limit exceeded".to_string(),
            500..=599 => format!("Resend unavailable ({}): {}", status, error_body),
            _ => format!("Unexpected status {}: {}", status, error_body),
        };

        Err(DomainError::new(ErrorCode::ExternalServiceError, message)
            .with_detail("status", status.as_u16().to_string()))
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError> {
        let request = Self::to_resend_request(email)?;

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("Resend request timed out after {:?}", self.config.timeout)
                } else if e.is_connect() {
                    format!("Connection failed: {}", e)
                } else {
                    e.to_string()
                };
                DomainError::new(ErrorCode::ExternalServiceError, message)
            })?;

        let response = self.handle_response_status(response).await?;

        let body: ResendResponse = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::ExternalServiceError,
                format!("Invalid Resend response: {}", e),
            )
        })?;

        tracing::debug!(email_id = %body.id, subject = %email.subject, "Email accepted by Resend");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderId;
    use crate::domain::order::{AddressRecord, PostalAddress};
    use crate::ports::OrderReceivedData;
    use axum::extract::State;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    // ════════════════════════════════════════════════════════════════════════════
    // Stub Resend Server
    // ════════════════════════════════════════════════════════════════════════════

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>,
    }

    async fn start_stub(status: StatusCode) -> (String, Captured) {
        let captured = Captured::default();

        let app = Router::new()
            .route(
                "/emails",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<serde_json::Value>| async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.requests.lock().unwrap().push((auth, body));
                        (status, Json(serde_json::json!({"id": "email_123"})))
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "CaseCobra <orders@casecobra.com>".to_string(),
            to: vec!["buyer@example.com".to_string()],
            subject: "Thanks for your order! (#order_1)".to_string(),
            template: EmailTemplate::OrderReceived(OrderReceivedData {
                order_id: OrderId::new("order_1").unwrap(),
                order_date: "7/9/2024".to_string(),
                shipping_address: AddressRecord::new(
                    "Jane Doe",
                    PostalAddress {
                        street: "1 Main St".to_string(),
                        city: "Springfield".to_string(),
                        state: None,
                        postal_code: "12345".to_string(),
                        country: "US".to_string(),
                    },
                ),
            }),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_defaults() {
        let config = ResendConfig::new("re_test");
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_from_email_config_uses_base_url() {
        let email_config = EmailConfig {
            resend_api_key: "re_test".to_string(),
            from_email: "orders@casecobra.com".to_string(),
            from_name: "CaseCobra".to_string(),
            api_base_url: "http://localhost:9999".to_string(),
            request_timeout_secs: 4,
        };

        let config = ResendConfig::from(&email_config);

        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert_eq!(config.api_key(), "re_test");
    }

    #[test]
    fn emails_url_tolerates_trailing_slash() {
        let sender =
            ResendEmailSender::new(ResendConfig::new("re_test").with_base_url("http://x/")).unwrap();
        assert_eq!(sender.emails_url(), "http://x/emails");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Request Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn request_body_has_resend_shape() {
        let email = email();
        let body = serde_json::to_value(ResendEmailSender::to_resend_request(&email).unwrap()).unwrap();

        assert_eq!(body["from"], "CaseCobra <orders@casecobra.com>");
        assert_eq!(body["to"], serde_json::json!(["buyer@example.com"]));
        assert_eq!(body["subject"], "Thanks for your order! (#order_1)");
        assert!(body["html"].as_str().unwrap().contains("order_1"));
        assert!(body["text"].as_str().unwrap().contains("7/9/2024"));
    }

    #[tokio::test]
    async fn send_posts_to_emails_endpoint_with_bearer_key() {
        let (base_url, captured) = start_stub(StatusCode::OK).await;
        let sender =
            ResendEmailSender::new(ResendConfig::new("re_live_key").with_base_url(base_url))
                .unwrap();

        sender.send(&email()).await.unwrap();

        let requests = captured.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer re_live_key"));
        assert_eq!(body["to"][0], "buyer@example.com");
    }

    #[tokio::test]
    async fn send_maps_rejection_to_external_service_error() {
        let (base_url, _captured) = start_stub(StatusCode::UNPROCESSABLE_ENTITY).await;
        let sender =
            ResendEmailSender::new(ResendConfig::new("re_key").with_base_url(base_url)).unwrap();

        let err = sender.send(&email()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert_eq!(err.details.get("status"), Some(&"422".to_string()));
    }

    #[tokio::test]
    async fn send_reports_unreachable_provider() {
        let sender = ResendEmailSender::new(
            ResendConfig::new("re_key").with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();

        let err = sender.send(&email()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }
}
