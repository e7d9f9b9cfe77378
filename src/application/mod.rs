//! Application layer: the high-level consumer of the payment capability.
//!
//! `PaymentProcessor` receives its gateway through the constructor and never
//! names a concrete provider. `GatewayRegistry` is the lookup table the
//! composition root (the binary, or a test) uses to pick a gateway by key
//! before injecting it.

pub mod processor;
pub mod registry;
