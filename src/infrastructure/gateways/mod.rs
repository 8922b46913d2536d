//! Concrete gateway implementations.
//!
//! The real payment and seat booking providers live in other systems and are
//! contractually reliable; these in-process implementations honor the same
//! contracts, logging each outbound call and always succeeding.

pub mod payment;
pub mod seat_reservation;

pub use payment::InProcessPaymentGateway;
pub use seat_reservation::InProcessSeatReservation;
