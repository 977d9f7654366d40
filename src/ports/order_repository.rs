//! Order repository port (write side).
//!
//! Orders are created by the storefront. The only write this service makes
//! is marking an order paid and attaching the checkout addresses.
//!
//! # Example
//!
//! ```ignore
//! let order = repo.mark_paid(&completed.paid_order_update()).await?;
//! assert!(order.is_paid);
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::order::{Order, PaidOrderUpdate};

/// Repository port for order payment updates.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Set `is_paid = true` and create the shipping and billing address
    /// records, returning the updated order.
    ///
    /// All three writes succeed or none do. Calling this twice for the same
    /// order creates two more address records.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if no order has the given id
    /// - `DatabaseError` on persistence failure
    async fn mark_paid(&self, update: &PaidOrderUpdate) -> Result<Order, DomainError>;
}
