//! Business logic services for the application layer.

pub mod purchase_service;

pub use purchase_service::{MAX_TICKETS_PER_PURCHASE, TicketPurchaseService};
