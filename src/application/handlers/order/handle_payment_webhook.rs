//! HandlePaymentWebhookHandler - Command handler for Stripe checkout webhooks.

use std::sync::Arc;

use crate::domain::checkout::{
    CheckoutCompleted, StripeCheckoutSession, StripeEvent, StripeEventType, WebhookError,
};
use crate::domain::foundation::OrderId;
use crate::domain::order::{AddressRecord, Order};
use crate::ports::{
    EmailSender, EmailTemplate, OrderReceivedData, OrderRepository, OutboundEmail,
    PaymentProvider,
};

/// Command to handle a payment webhook.
#[derive(Debug, Clone)]
pub struct HandlePaymentWebhookCommand {
    /// Raw webhook payload, exactly as received.
    pub payload: Vec<u8>,
    /// Stripe-Signature header, if the request carried one.
    pub signature: Option<String>,
}

/// What the handler did with an accepted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookAction {
    /// Checkout completed: order marked paid and confirmation sent.
    OrderPaid { order_id: OrderId },
    /// Event type this service does not act on.
    Ignored,
}

/// Result of webhook processing.
#[derive(Debug, Clone)]
pub struct HandlePaymentWebhookResult {
    /// The verified event, echoed back in the acknowledgment.
    pub event: StripeEvent,
    pub action: WebhookAction,
}

/// Handler for processing payment provider webhooks.
///
/// Verifies the delivery, then for `checkout.session.completed` marks the
/// order paid and emails the customer. The order update and the email are
/// not transactional: if sending fails the order stays paid and the error
/// is still returned so Stripe redelivers.
///
/// Deliveries are not deduplicated. A redelivered event repeats both the
/// order update and the email.
pub struct HandlePaymentWebhookHandler {
    payment_provider: Arc<dyn PaymentProvider>,
    order_repository: Arc<dyn OrderRepository>,
    email_sender: Arc<dyn EmailSender>,
    email_from: String,
}

impl HandlePaymentWebhookHandler {
    pub fn new(
        payment_provider: Arc<dyn PaymentProvider>,
        order_repository: Arc<dyn OrderRepository>,
        email_sender: Arc<dyn EmailSender>,
        email_from: impl Into<String>,
    ) -> Self {
        Self {
            payment_provider,
            order_repository,
            email_sender,
            email_from: email_from.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: HandlePaymentWebhookCommand,
    ) -> Result<HandlePaymentWebhookResult, WebhookError> {
        // 1. Require a signature before touching the payload
        let signature = cmd
            .signature
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(WebhookError::MissingSignature)?;

        // 2. Verify signature and parse event
        let event = self
            .payment_provider
            .verify_webhook(&cmd.payload, signature)
            .await?;

        tracing::debug!(
            event_id = %event.id,
            event_type = %event.event_type,
            livemode = event.livemode,
            "Verified Stripe webhook"
        );

        // 3. Dispatch on event type
        let action = match event.parsed_type() {
            StripeEventType::CheckoutSessionCompleted => {
                self.handle_checkout_completed(&event).await?
            }
            StripeEventType::Unknown => {
                tracing::debug!(event_type = %event.event_type, "Ignoring unhandled event type");
                WebhookAction::Ignored
            }
        };

        Ok(HandlePaymentWebhookResult { event, action })
    }

    async fn handle_checkout_completed(
        &self,
        event: &StripeEvent,
    ) -> Result<WebhookAction, WebhookError> {
        let session: StripeCheckoutSession = event
            .deserialize_object()
            .map_err(|e| WebhookError::MalformedSession(e.to_string()))?;

        let completed = CheckoutCompleted::try_from_session(&session)?;

        if !session.is_paid() {
            tracing::warn!(
                event_id = %event.id,
                session_id = %session.id,
                payment_status = ?session.payment_status,
                "Checkout completed without a paid status"
            );
        }

        // 4. Mark order paid with both addresses
        let order = self
            .order_repository
            .mark_paid(&completed.paid_order_update())
            .await
            .map_err(WebhookError::from_repository)?;

        tracing::info!(
            event_id = %event.id,
            order_id = %order.id,
            user_id = %completed.user_id,
            "Order marked paid"
        );

        // 5. Send confirmation email
        let email = self.order_received_email(&completed, &order);
        self.email_sender
            .send(&email)
            .await
            .map_err(WebhookError::from_email)?;

        tracing::info!(order_id = %order.id, "Order confirmation email sent");

        Ok(WebhookAction::OrderPaid { order_id: order.id })
    }

    fn order_received_email(&self, completed: &CheckoutCompleted, order: &Order) -> OutboundEmail {
        let shipping_address = AddressRecord::new(
            completed.customer_name.clone(),
            completed.shipping_address.clone(),
        );

        OutboundEmail {
            from: self.email_from.clone(),
            to: vec![completed.customer_email.clone()],
            subject: format!("Thanks for your order! (#{})", completed.order_id),
            template: EmailTemplate::OrderReceived(OrderReceivedData {
                order_id: completed.order_id.clone(),
                order_date: order.created_at.to_short_date(),
                shipping_address,
            }),
        }
    }
}
