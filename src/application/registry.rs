use crate::domain::ports::PaymentGatewayRef;
use crate::error::{PaymentError, Result};
use crate::infrastructure::{BasicGateway, PayPalGateway};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Maps gateway keys to gateway instances.
///
/// A plain owned value: whoever builds the processors builds the registry.
/// Keys are matched case-insensitively.
#[derive(Default, Clone)]
pub struct GatewayRegistry {
    gateways: BTreeMap<String, PaymentGatewayRef>,
}

impl GatewayRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in providers under `basic` and `paypal`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("basic", Arc::new(BasicGateway::new()));
        registry.register("paypal", Arc::new(PayPalGateway::new()));
        registry
    }

    /// Registers `gateway` under `key`, returning the gateway it replaced, if any.
    pub fn register(
        &mut self,
        key: impl AsRef<str>,
        gateway: PaymentGatewayRef,
    ) -> Option<PaymentGatewayRef> {
        self.gateways.insert(normalize(key.as_ref()), gateway)
    }

    pub fn get(&self, key: &str) -> Result<PaymentGatewayRef> {
        self.gateways
            .get(&normalize(key))
            .cloned()
            .ok_or_else(|| PaymentError::UnknownGateway(key.to_string()))
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys().map(String::as_str)
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
