//! In-process seat reservation implementation.

use crate::domain::gateways::SeatReservationService;
use async_trait::async_trait;
use tracing::info;

/// Seat reservation service that records bookings in the log and always
/// succeeds.
///
/// Stands in for the external seat booking provider.
pub struct InProcessSeatReservation;

impl InProcessSeatReservation {
    /// Creates a new in-process seat reservation service.
    pub fn new() -> Self {
        Self
    }
}

impl Default for InProcessSeatReservation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeatReservationService for InProcessSeatReservation {
    async fn reserve_seats(&self, account_id: i64, seat_count: u64) {
        info!(account_id, seat_count, "reserving seats");
    }
}
