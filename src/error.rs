//! Purchase rejection errors.

use crate::domain::entities::TicketType;

/// Reasons a ticket purchase is rejected.
///
/// Every validation failure is terminal for the call: the error is surfaced
/// to the caller directly, nothing is retried and neither external
/// collaborator is invoked. The collaborators themselves never contribute an
/// error here; they are contractually infallible.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// Account id is zero or negative.
    #[error("invalid account id {account_id}: must be greater than zero")]
    InvalidAccount { account_id: i64 },

    /// A request line asked for zero tickets.
    #[error("invalid ticket request: {ticket_type} quantity must be greater than zero")]
    InvalidTicketRequest { ticket_type: TicketType },

    /// The purchase exceeds the per-call ticket limit.
    #[error("maximum of {limit} tickets per purchase, requested {requested}")]
    TooManyTickets { requested: u64, limit: u64 },

    /// No adult ticket in the purchase.
    #[error("at least one adult ticket is required")]
    NoAdultTicket,

    /// More infants than adults to hold them.
    #[error("infant tickets ({infants}) must not exceed adult tickets ({adults})")]
    TooManyInfants { infants: u64, adults: u64 },
}

impl PurchaseError {
    /// Stable machine-readable code for logs and client output.
    pub fn kind(&self) -> &'static str {
        match self {
            PurchaseError::InvalidAccount { .. } => "invalid_account",
            PurchaseError::InvalidTicketRequest { .. } => "invalid_ticket_request",
            PurchaseError::TooManyTickets { .. } => "too_many_tickets",
            PurchaseError::NoAdultTicket => "no_adult_ticket",
            PurchaseError::TooManyInfants { .. } => "too_many_infants",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = PurchaseError::InvalidAccount { account_id: -3 };
        assert!(err.to_string().contains("-3"));

        let err = PurchaseError::InvalidTicketRequest {
            ticket_type: TicketType::Child,
        };
        assert!(err.to_string().contains("CHILD"));

        let err = PurchaseError::TooManyTickets {
            requested: 21,
            limit: 20,
        };
        assert!(err.to_string().contains("21"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_kind_codes_are_stable() {
        assert_eq!(
            PurchaseError::InvalidAccount { account_id: 0 }.kind(),
            "invalid_account"
        );
        assert_eq!(PurchaseError::NoAdultTicket.kind(), "no_adult_ticket");
        assert_eq!(
            PurchaseError::TooManyInfants {
                infants: 3,
                adults: 2
            }
            .kind(),
            "too_many_infants"
        );
    }
}
