use super::amount::Amount;
use super::receipt::Receipt;
use crate::error::Result;
use std::sync::Arc;

/// The capability every payment provider exposes.
///
/// High-level code depends on this trait only. Implementations must not
/// rely on being driven by any particular consumer.
pub trait PaymentGateway: Send + Sync {
    /// Human-readable provider name, used in receipts and logs.
    fn name(&self) -> &str;

    fn process_payment(&self, amount: Amount) -> Result<Receipt>;
}

pub type PaymentGatewayRef = Arc<dyn PaymentGateway>;
