//! Email adapters - transactional mail delivery.
//!
//! - `ResendEmailSender` - `EmailSender` over the Resend HTTP API
//! - `render_order_received` - plain-text and HTML body for order confirmations

mod order_received;
mod resend_sender;

pub use order_received::{render_order_received, RenderedEmail};
pub use resend_sender::{ResendConfig, ResendEmailSender};
