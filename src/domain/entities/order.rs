//! Per-purchase aggregation of ticket requests.

use std::collections::HashMap;

use crate::domain::entities::{TicketType, TicketTypeRequest};

/// Running per-category totals for one purchase call.
///
/// Built fresh for every purchase and discarded afterwards; never persisted
/// or shared between calls. Multiple requests naming the same category are
/// summed into a single entry, so a category contributes to the derived
/// [`OrderSummary`] exactly once no matter how the input was grouped.
#[derive(Debug, Default)]
pub struct OrderTotals {
    totals: HashMap<TicketType, CategoryTotals>,
}

#[derive(Debug, Default, Clone, Copy)]
struct CategoryTotals {
    quantity: u64,
    price: u64,
}

impl OrderTotals {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one request into the aggregate.
    ///
    /// Accumulates quantity and price under the request's category. Totals
    /// are kept in `u64`, so even absurd quantities cannot overflow before
    /// the purchase limit check rejects them.
    pub fn add(&mut self, request: &TicketTypeRequest) {
        let entry = self.totals.entry(request.ticket_type).or_default();
        entry.quantity += u64::from(request.quantity);
        entry.price += request.price();
    }

    /// Derives scalar totals in a single pass over the aggregate.
    ///
    /// Infant tickets count toward `total_tickets` but contribute nothing to
    /// `total_price`; adult and infant quantities are also tracked separately
    /// for the business rules.
    pub fn summarize(&self) -> OrderSummary {
        let mut summary = OrderSummary::default();

        for (ticket_type, totals) in &self.totals {
            summary.total_tickets += totals.quantity;

            if *ticket_type == TicketType::Infant {
                summary.infant_tickets += totals.quantity;
                continue;
            }

            summary.total_price += totals.price;
            if *ticket_type == TicketType::Adult {
                summary.adult_tickets += totals.quantity;
            }
        }

        summary
    }
}

/// Scalar totals derived from [`OrderTotals`] for rule checks and the
/// outbound collaborator calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    /// Every ticket in the purchase, infants included.
    pub total_tickets: u64,
    /// Amount to charge; infant tickets are free and excluded.
    pub total_price: u64,
    pub adult_tickets: u64,
    pub infant_tickets: u64,
}
