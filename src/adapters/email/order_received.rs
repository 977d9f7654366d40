//! Order-received email body.
//!
//! Rendered with Askama from a plain-text and an HTML template sharing the
//! same fields. The HTML template escapes every value.

use askama::Template;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::OrderReceivedData;

/// HTML template for the order confirmation.
#[derive(Template)]
#[template(path = "email/order_received.html")]
struct OrderReceivedEmailHtml<'a> {
    name: &'a str,
    street: &'a str,
    city_line: &'a str,
    country: &'a str,
    order_id: &'a str,
    order_date: &'a str,
}

/// Plain text template for the order confirmation.
#[derive(Template)]
#[template(path = "email/order_received.txt")]
struct OrderReceivedEmailText<'a> {
    name: &'a str,
    street: &'a str,
    city_line: &'a str,
    country: &'a str,
    order_id: &'a str,
    order_date: &'a str,
}

/// Rendered message bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub text: String,
    pub html: String,
}

/// Renders the confirmation sent once an order is paid.
pub fn render_order_received(data: &OrderReceivedData) -> Result<RenderedEmail, DomainError> {
    let shipping = &data.shipping_address;
    let address = &shipping.address;

    let city_line = match &address.state {
        Some(state) => format!("{}, {} {}", address.city, state, address.postal_code),
        None => format!("{} {}", address.city, address.postal_code),
    };

    let html = OrderReceivedEmailHtml {
        name: &shipping.name,
        street: &address.street,
        city_line: &city_line,
        country: &address.country,
        order_id: data.order_id.as_str(),
        order_date: &data.order_date,
    }
    .render()
    .map_err(template_error)?;

    let text = OrderReceivedEmailText {
        name: &shipping.name,
        street: &address.street,
        city_line: &city_line,
        country: &address.country,
        order_id: data.order_id.as_str(),
        order_date: &data.order_date,
    }
    .render()
    .map_err(template_error)?;

    Ok(RenderedEmail { text, html })
}

fn template_error(err: askama::Error) -> DomainError {
    DomainError::new(
        ErrorCode::InternalError,
        format!("Failed to render order email: {}", err),
    )
}
