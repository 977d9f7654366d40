//! Order module - orders and the addresses attached on payment.

mod address;
#[allow(clippy::module_inception)]
mod order;

pub use address::{AddressRecord, PostalAddress};
pub use order::{Order, PaidOrderUpdate};
