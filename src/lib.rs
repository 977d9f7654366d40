//! CaseCobra - Payment confirmation webhook service
//!
//! Receives Stripe `checkout.session.completed` deliveries, verifies them,
//! marks the matching order paid with its shipping and billing addresses,
//! and emails the customer an order confirmation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
