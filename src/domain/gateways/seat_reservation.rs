//! Collaborator contract for reserving cinema seats.

use async_trait::async_trait;

/// Outbound interface to the seat booking provider.
///
/// Like the payment provider, this service is contractually reliable, so the
/// method has no error channel. The reserved seat count equals the full
/// ticket count of the purchase, infants included.
///
/// # Implementations
///
/// - [`crate::infrastructure::gateways::InProcessSeatReservation`] - logging in-process stand-in
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    /// Reserves `seat_count` seats for the given account.
    ///
    /// Called at most once per purchase, always after the payment charge.
    async fn reserve_seats(&self, account_id: i64, seat_count: u64);
}
