//! Built-in shipping rules
//!
//! - Standard / Express / Overnight: `base_fee + weight * per_unit`
//! - International: flat fee by destination, weight ignored

use crate::config::{InternationalRates, WeightRate};
use crate::strategy::ShippingStrategy;
use rust_decimal::Decimal;

/// Shipping priced by weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightBasedShipping {
    shipping_method: String,
    rate: WeightRate,
}

impl WeightBasedShipping {
    pub fn new(shipping_method: impl Into<String>, rate: WeightRate) -> Self {
        Self {
            shipping_method: shipping_method.into(),
            rate,
        }
    }

    /// 5.00 + weight × 0.5
    pub fn standard() -> Self {
        Self::new(
            "Standard",
            WeightRate::new(Decimal::new(500, 2), Decimal::new(5, 1)),
        )
    }

    /// 15.00 + weight × 1.0
    pub fn express() -> Self {
        Self::new(
            "Express",
            WeightRate::new(Decimal::new(1500, 2), Decimal::new(10, 1)),
        )
    }

    /// 25.00 + weight × 2.0
    pub fn overnight() -> Self {
        Self::new(
            "Overnight",
            WeightRate::new(Decimal::new(2500, 2), Decimal::new(20, 1)),
        )
    }

    pub fn rate(&self) -> WeightRate {
        self.rate
    }
}

impl ShippingStrategy for WeightBasedShipping {
    fn shipping_method(&self) -> &str {
        &self.shipping_method
    }

    fn calculate_shipping_cost(&self, weight: Decimal, _destination: &str) -> Decimal {
        self.rate
            .base_fee
            .saturating_add(weight.saturating_mul(self.rate.per_unit))
    }
}

/// Flat-rate international shipping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternationalShipping {
    rates: InternationalRates,
}

impl Default for InternationalShipping {
    fn default() -> Self {
        Self::new(InternationalRates::default())
    }
}

impl InternationalShipping {
    pub fn new(rates: InternationalRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &InternationalRates {
        &self.rates
    }
}

impl ShippingStrategy for InternationalShipping {
    fn shipping_method(&self) -> &str {
        "International"
    }

    fn calculate_shipping_cost(&self, _weight: Decimal, destination: &str) -> Decimal {
        self.rates
            .destinations
            .get(destination)
            .copied()
            .unwrap_or(self.rates.fallback)
    }
}
