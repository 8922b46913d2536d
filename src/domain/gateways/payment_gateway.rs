//! Collaborator contract for charging ticket payments.

use async_trait::async_trait;

/// Outbound interface to the payment provider.
///
/// The provider is owned by another team and is contractually reliable: a
/// charge for a fully validated purchase always succeeds, so the method has
/// no error channel. Compensation for provider outages is out of scope here.
///
/// # Implementations
///
/// - [`crate::infrastructure::gateways::InProcessPaymentGateway`] - logging in-process stand-in
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` currency units to the given account.
    ///
    /// Called at most once per purchase, and only after every business rule
    /// has passed.
    async fn charge_account(&self, account_id: i64, amount: u64);
}
