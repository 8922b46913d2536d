//! Ticket purchase validation and aggregation service.

use std::sync::Arc;

use crate::domain::entities::{OrderSummary, OrderTotals, TicketType, TicketTypeRequest};
use crate::domain::gateways::{PaymentGateway, SeatReservationService};
use crate::error::PurchaseError;

/// Upper bound on tickets in a single purchase, infants included.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Service that validates, aggregates, and executes ticket purchases.
///
/// Each call is an independent, stateless computation: the request list is
/// aggregated per category, the business rules are checked in a fixed order,
/// and only when all of them pass are the payment and seat reservation
/// collaborators invoked, exactly once each, payment first.
pub struct TicketPurchaseService<P: PaymentGateway, S: SeatReservationService> {
    payment_gateway: Arc<P>,
    seat_reservation: Arc<S>,
}

impl<P: PaymentGateway, S: SeatReservationService> TicketPurchaseService<P, S> {
    /// Creates a new purchase service.
    pub fn new(payment_gateway: Arc<P>, seat_reservation: Arc<S>) -> Self {
        Self {
            payment_gateway,
            seat_reservation,
        }
    }

    /// Validates and executes a ticket purchase for one account.
    ///
    /// Requests naming the same category are summed, not treated as separate
    /// purchases. An empty request list aggregates to zero tickets and is
    /// rejected for having no adult ticket rather than silently accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InvalidAccount`] if `account_id` is not
    /// positive, checked before anything else.
    ///
    /// Returns [`PurchaseError::InvalidTicketRequest`] on the first request
    /// with a zero quantity; the whole purchase is aborted and no partial
    /// aggregation survives.
    ///
    /// Returns [`PurchaseError::TooManyTickets`], [`PurchaseError::NoAdultTicket`]
    /// or [`PurchaseError::TooManyInfants`] when the aggregated totals break
    /// the corresponding business rule, checked in that order.
    ///
    /// On any error, neither collaborator has been invoked.
    pub async fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        if account_id <= 0 {
            return Err(PurchaseError::InvalidAccount { account_id });
        }

        let summary = Self::aggregate(requests)?;
        Self::check_rules(&summary)?;

        self.payment_gateway
            .charge_account(account_id, summary.total_price)
            .await;
        self.seat_reservation
            .reserve_seats(account_id, summary.total_tickets)
            .await;

        tracing::info!(
            account_id,
            total_price = summary.total_price,
            seats = summary.total_tickets,
            "purchase completed"
        );

        Ok(())
    }

    /// Folds the request list into per-category totals and derives the
    /// scalar summary. Fails fast on the first invalid request.
    fn aggregate(requests: &[TicketTypeRequest]) -> Result<OrderSummary, PurchaseError> {
        let mut totals = OrderTotals::new();

        for request in requests {
            if request.quantity == 0 {
                return Err(PurchaseError::InvalidTicketRequest {
                    ticket_type: request.ticket_type,
                });
            }
            totals.add(request);
        }

        Ok(totals.summarize())
    }

    /// Business rules, checked in a fixed order with short-circuiting.
    fn check_rules(summary: &OrderSummary) -> Result<(), PurchaseError> {
        if summary.total_tickets > MAX_TICKETS_PER_PURCHASE {
            return Err(PurchaseError::TooManyTickets {
                requested: summary.total_tickets,
                limit: MAX_TICKETS_PER_PURCHASE,
            });
        }
        if summary.adult_tickets < 1 {
            return Err(PurchaseError::NoAdultTicket);
        }
        if summary.infant_tickets > summary.adult_tickets {
            return Err(PurchaseError::TooManyInfants {
                infants: summary.infant_tickets,
                adults: summary.adult_tickets,
            });
        }
        Ok(())
    }
}
