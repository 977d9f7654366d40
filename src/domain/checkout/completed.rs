//! Validated contents of a completed checkout.

use super::checkout_session::{StripeAddress, StripeCheckoutSession};
use super::webhook_errors::WebhookError;
use crate::domain::foundation::{OrderId, UserId};
use crate::domain::order::{AddressRecord, PaidOrderUpdate, PostalAddress};

/// Metadata key carrying the storefront order id.
pub const ORDER_ID_METADATA_KEY: &str = "orderId";

/// Metadata key carrying the storefront user id.
pub const USER_ID_METADATA_KEY: &str = "userId";

/// Everything needed to fulfil an order, extracted from a checkout session
/// and checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutCompleted {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub customer_email: String,
    pub customer_name: String,
    pub billing_address: PostalAddress,
    pub shipping_address: PostalAddress,
}

impl CheckoutCompleted {
    /// Validates a session.
    ///
    /// Checks run in a fixed order so the first missing piece is the one
    /// reported: customer email, then order and user metadata, then the
    /// customer name and both addresses.
    pub fn try_from_session(session: &StripeCheckoutSession) -> Result<Self, WebhookError> {
        let details = session.customer_details.as_ref();

        let customer_email = details
            .and_then(|d| non_empty(d.email.as_deref()))
            .ok_or(WebhookError::MissingField("customer_details.email"))?;

        let order_id = session
            .metadata_value(ORDER_ID_METADATA_KEY)
            .ok_or(WebhookError::MissingMetadata(ORDER_ID_METADATA_KEY))?;
        let user_id = session
            .metadata_value(USER_ID_METADATA_KEY)
            .ok_or(WebhookError::MissingMetadata(USER_ID_METADATA_KEY))?;

        let customer_name = details
            .and_then(|d| non_empty(d.name.as_deref()))
            .ok_or(WebhookError::MissingField("customer_details.name"))?;

        let billing_address = details
            .and_then(|d| d.address.as_ref())
            .ok_or(WebhookError::MissingField("customer_details.address"))
            .and_then(|a| postal_address(a, "customer_details.address"))?;

        let shipping_address = session
            .shipping()
            .and_then(|s| s.address.as_ref())
            .ok_or(WebhookError::MissingField("shipping.address"))
            .and_then(|a| postal_address(a, "shipping.address"))?;

        Ok(Self {
            order_id: OrderId::new(order_id)
                .map_err(|_| WebhookError::MissingMetadata(ORDER_ID_METADATA_KEY))?,
            user_id: UserId::new(user_id)
                .map_err(|_| WebhookError::MissingMetadata(USER_ID_METADATA_KEY))?,
            customer_email: customer_email.to_string(),
            customer_name: customer_name.to_string(),
            billing_address,
            shipping_address,
        })
    }

    /// The order mutation for this checkout. The customer's name is written
    /// on both address records.
    pub fn paid_order_update(&self) -> PaidOrderUpdate {
        PaidOrderUpdate {
            order_id: self.order_id.clone(),
            shipping_address: AddressRecord::new(
                self.customer_name.clone(),
                self.shipping_address.clone(),
            ),
            billing_address: AddressRecord::new(
                self.customer_name.clone(),
                self.billing_address.clone(),
            ),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn postal_address(
    address: &StripeAddress,
    path: &'static str,
) -> Result<PostalAddress, WebhookError> {
    let required = |value: &Option<String>| {
        non_empty(value.as_deref())
            .map(str::to_string)
            .ok_or(WebhookError::MissingField(path))
    };

    Ok(PostalAddress {
        street: required(&address.line1)?,
        city: required(&address.city)?,
        state: non_empty(address.state.as_deref()).map(str::to_string),
        postal_code: required(&address.postal_code)?,
        country: required(&address.country)?,
    })
}
