//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `order` - Orders and the addresses attached when they are paid
//! - `checkout` - Stripe checkout events, signature verification, validation

pub mod checkout;
pub mod foundation;
pub mod order;
