//! Postal address value objects written alongside a paid order.

use serde::{Deserialize, Serialize};

/// A validated postal address.
///
/// Street, city, postal code and country are always present; state is
/// optional because many countries have no subdivision in their addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
}

/// An address as persisted for an order: the postal address plus the
/// recipient name printed on the label or invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub name: String,
    #[serde(flatten)]
    pub address: PostalAddress,
}

impl AddressRecord {
    pub fn new(name: impl Into<String>, address: PostalAddress) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_record_serializes_flat_camel_case() {
        let record = AddressRecord::new(
            "Jane Doe",
            PostalAddress {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                state: None,
                postal_code: "12345".to_string(),
                country: "US".to_string(),
            },
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Jane Doe");
        assert_eq!(json["street"], "1 Main St");
        assert_eq!(json["postalCode"], "12345");
        assert!(json["state"].is_null());
    }
}
