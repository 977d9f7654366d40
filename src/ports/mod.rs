//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentProvider` - Webhook authentication against the payment gateway
//! - `OrderRepository` - Marking orders paid
//! - `EmailSender` - Transactional email delivery

mod email_sender;
mod order_repository;
mod payment_provider;

pub use email_sender::{EmailSender, EmailTemplate, OrderReceivedData, OutboundEmail};
pub use order_repository::OrderRepository;
pub use payment_provider::PaymentProvider;
