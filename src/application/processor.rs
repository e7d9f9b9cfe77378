use crate::domain::amount::Amount;
use crate::domain::ports::PaymentGatewayRef;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use tracing::debug;

/// Processes payments through whichever gateway it was built with.
///
/// The processor holds a shared reference to exactly one gateway, assigned
/// once in [`PaymentProcessor::new`]. It has no selection logic and no state
/// of its own, so its behaviour is fully determined by the injected gateway.
pub struct PaymentProcessor {
    gateway: PaymentGatewayRef,
}

impl PaymentProcessor {
    /// Creates a processor bound to `gateway`.
    ///
    /// The same gateway may back several processors.
    pub fn new(gateway: PaymentGatewayRef) -> Self {
        Self { gateway }
    }

    /// Forwards `amount` to the held gateway and returns its result unchanged.
    pub fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        debug!(gateway = self.gateway.name(), %amount, "forwarding payment");
        self.gateway.process_payment(amount)
    }

    pub fn gateway_name(&self) -> &str {
        self.gateway.name()
    }
}
