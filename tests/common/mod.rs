#![allow(dead_code)]

use payment_gateway::domain::amount::Amount;
use payment_gateway::domain::ports::PaymentGateway;
use payment_gateway::domain::receipt::Receipt;
use payment_gateway::error::{PaymentError, Result};
use std::sync::Mutex;

/// A gateway that records every amount it is asked to process.
///
/// When built with [`RecordingGateway::failing`] it records the call and then
/// returns `PaymentError::Gateway` with the configured reason.
pub struct RecordingGateway {
    name: String,
    failure: Option<String>,
    calls: Mutex<Vec<Amount>>,
}

impl RecordingGateway {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &str, reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::new(name)
        }
    }

    pub fn calls(&self) -> Vec<Amount> {
        self.calls.lock().unwrap().clone()
    }
}

impl PaymentGateway for RecordingGateway {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_payment(&self, amount: Amount) -> Result<Receipt> {
        self.calls.lock().unwrap().push(amount);
        match &self.failure {
            Some(reason) => Err(PaymentError::Gateway(reason.clone())),
            None => Ok(Receipt::new(self.name.clone(), amount)),
        }
    }
}
