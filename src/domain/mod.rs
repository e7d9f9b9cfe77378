//! Domain layer: the payment capability and the value objects flowing through it.
//!
//! Nothing in here knows about a concrete gateway. Providers live in
//! `infrastructure`, and the consumer (`PaymentProcessor`) lives in
//! `application`.

pub mod amount;
pub mod ports;
pub mod receipt;
