use super::amount::Amount;
use serde::Serialize;
use std::fmt;

/// The observable outcome of a processed payment.
///
/// Displays as `"<gateway> processed <amount>"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub gateway: String,
    pub amount: Amount,
}

impl Receipt {
    pub fn new(gateway: impl Into<String>, amount: Amount) -> Self {
        Self {
            gateway: gateway.into(),
            amount,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} processed {}", self.gateway, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_receipt_serializes_amount_as_string() {
        let receipt = Receipt::new("PayPal", dec!(200.0).try_into().unwrap());
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "gateway": "PayPal", "amount": "200.0" })
        );
    }
}
