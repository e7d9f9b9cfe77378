use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGateway;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use tracing::info;

/// The default provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicGateway;

impl BasicGateway {
    pub const NAME: &'static str = "Basic Payment Gateway";

    pub fn new() -> Self {
        Self
    }
}

impl PaymentGateway for BasicGateway {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        info!(gateway = Self::NAME, %amount, "payment processed");
        Ok(Receipt::new(Self::NAME, amount))
    }
}
