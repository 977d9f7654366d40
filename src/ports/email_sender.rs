//! Email sender port for transactional mail.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{DomainError, OrderId};
use crate::domain::order::AddressRecord;

/// Port for sending transactional email through a delivery provider.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Hand the message to the provider.
    ///
    /// Returns once the provider has accepted the message; delivery itself
    /// is asynchronous.
    ///
    /// # Errors
    ///
    /// - `ExternalServiceError` if the provider rejects the message or is
    ///   unreachable
    async fn send(&self, email: &OutboundEmail) -> Result<(), DomainError>;
}

/// A message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender in `Name <address>` form.
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub template: EmailTemplate,
}

/// Templates this service knows how to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Confirmation sent after an order is paid.
    OrderReceived(OrderReceivedData),
}

/// Data shown in the order-received email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceivedData {
    pub order_id: OrderId,
    /// Order creation date, `M/D/YYYY`.
    pub order_date: String,
    pub shipping_address: AddressRecord,
}
