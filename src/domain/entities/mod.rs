//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without orchestration logic:
//!
//! - [`TicketType`] - A ticket category with its fixed unit price
//! - [`TicketTypeRequest`] - One category + quantity line of a purchase
//! - [`OrderTotals`] - Ephemeral per-category aggregate for a single purchase
//! - [`OrderSummary`] - Scalar totals derived from the aggregate
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod order;
pub mod ticket;

pub use order::{OrderSummary, OrderTotals};
pub use ticket::{TicketType, TicketTypeRequest};
