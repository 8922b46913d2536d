//! Ticket categories and purchase request line items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a cinema ticket.
///
/// Each category carries a fixed unit price in currency-agnostic integer
/// units. The price table is part of the type and never changes at runtime,
/// so it is safe to read from any number of concurrent purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Infant,
    Child,
    Adult,
}

impl TicketType {
    /// All defined ticket categories.
    pub const ALL: [TicketType; 3] = [TicketType::Infant, TicketType::Child, TicketType::Adult];

    /// Unit price for this category.
    ///
    /// Infants travel on an adult's lap and are not charged.
    pub const fn price(self) -> u64 {
        match self {
            TicketType::Infant => 0,
            TicketType::Child => 10,
            TicketType::Adult => 20,
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TicketType::Infant => "INFANT",
            TicketType::Child => "CHILD",
            TicketType::Adult => "ADULT",
        };
        f.write_str(name)
    }
}

/// A single line of a purchase: how many tickets of one category.
///
/// Immutable value type; the quantity is validated by the purchase service,
/// not on construction, so a request with quantity zero can be represented
/// and rejected with a specific error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub quantity: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket request.
    pub const fn new(ticket_type: TicketType, quantity: u32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Price contribution of this request: quantity × unit price.
    pub const fn price(&self) -> u64 {
        self.ticket_type.price() * self.quantity as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_table() {
        assert_eq!(TicketType::Infant.price(), 0);
        assert_eq!(TicketType::Child.price(), 10);
        assert_eq!(TicketType::Adult.price(), 20);
    }

    #[test]
    fn test_request_price() {
        assert_eq!(TicketTypeRequest::new(TicketType::Adult, 3).price(), 60);
        assert_eq!(TicketTypeRequest::new(TicketType::Child, 2).price(), 20);
        assert_eq!(TicketTypeRequest::new(TicketType::Infant, 5).price(), 0);
    }

    #[test]
    fn test_display_matches_wire_names() {
        assert_eq!(TicketType::Adult.to_string(), "ADULT");
        assert_eq!(TicketType::Child.to_string(), "CHILD");
        assert_eq!(TicketType::Infant.to_string(), "INFANT");
    }

    #[test]
    fn test_serde_roundtrip_uses_uppercase_names() {
        let request = TicketTypeRequest::new(TicketType::Adult, 2);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"type":"ADULT","quantity":2}"#);

        let parsed: TicketTypeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
