//! Gateway trait definitions for the domain layer.
//!
//! These traits abstract the two external collaborators the purchase flow
//! depends on, in the same way repository traits abstract data access:
//!
//! - Traits define the contract for the outbound operations
//! - Implementations live in `crate::infrastructure::gateways`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! Both collaborators are treated as infallible per their contracts, so the
//! trait methods return `()` rather than `Result`.

pub mod payment_gateway;
pub mod seat_reservation;

pub use payment_gateway::PaymentGateway;
pub use seat_reservation::SeatReservationService;

#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
#[cfg(test)]
pub use seat_reservation::MockSeatReservationService;
