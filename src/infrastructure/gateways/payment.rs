//! In-process payment gateway implementation.

use crate::domain::gateways::PaymentGateway;
use async_trait::async_trait;
use tracing::info;

/// Payment gateway that records charges in the log and always succeeds.
///
/// Stands in for the external payment provider, which accepts every charge
/// for a validated purchase.
pub struct InProcessPaymentGateway;

impl InProcessPaymentGateway {
    /// Creates a new in-process payment gateway.
    pub fn new() -> Self {
        Self
    }
}

impl Default for InProcessPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for InProcessPaymentGateway {
    async fn charge_account(&self, account_id: i64, amount: u64) {
        info!(account_id, amount, "charging account");
    }
}
