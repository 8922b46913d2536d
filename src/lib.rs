//! # Cinema Tickets
//!
//! A ticket purchase validation and aggregation service.
//!
//! Given an account id and a list of ticket requests, the service sums
//! quantities and prices per category and enforces the purchase rules. Only
//! when every rule passes does it charge the account and reserve seats
//! through two external collaborators.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and gateway traits
//! - **Application Layer** ([`application`]) - Purchase validation and orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concrete gateway implementations
//!
//! ## Business Rules
//!
//! - At most 20 tickets per purchase, infants included
//! - Every purchase needs at least one adult ticket
//! - No more infant tickets than adult tickets (each infant sits on an
//!   adult's lap)
//!
//! Reserved seats equal the total ticket count, infants included; see the
//! seat accounting note in `DESIGN.md`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Purchase from the command line
//! cargo run --bin boxoffice -- purchase --account-id 5 --adult 1 --child 1 --infant 1
//!
//! # Show the price table
//! cargo run --bin boxoffice -- prices
//! ```
//!
//! ## Configuration
//!
//! Logging is configured from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PurchaseError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MAX_TICKETS_PER_PURCHASE, TicketPurchaseService};
    pub use crate::domain::entities::{OrderSummary, OrderTotals, TicketType, TicketTypeRequest};
    pub use crate::domain::gateways::{PaymentGateway, SeatReservationService};
    pub use crate::error::PurchaseError;
}
