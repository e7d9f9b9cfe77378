//! Concrete payment providers implementing `PaymentGateway`.

pub mod basic;
pub mod paypal;

pub use basic::BasicGateway;
pub use paypal::PayPalGateway;
