//! Order entity as seen by the payment confirmation flow.
//!
//! Orders are created and owned by the storefront; this service only marks
//! them paid and attaches the addresses collected at checkout.

use serde::Serialize;

use super::address::AddressRecord;
use crate::domain::foundation::{OrderId, Timestamp, UserId};

/// Snapshot of an order after it has been updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub is_paid: bool,
    pub created_at: Timestamp,
}

/// The mutation applied to an order when its checkout completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidOrderUpdate {
    pub order_id: OrderId,
    pub shipping_address: AddressRecord,
    pub billing_address: AddressRecord,
}
