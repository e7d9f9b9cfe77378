use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("Invalid amount: {0} (amounts must not be negative)")]
    InvalidAmount(Decimal),
    #[error("Malformed amount: {0:?}")]
    MalformedAmount(String),
    #[error("Unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("Gateway error: {0}")]
    Gateway(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
