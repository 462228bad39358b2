//! Pricing configuration
//!
//! Rates and fees for the built-in strategies. All fields are defaulted,
//! so a JSON file may override only part of the table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Fee = `base_fee + weight * per_unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightRate {
    pub base_fee: Decimal,
    pub per_unit: Decimal,
}

impl WeightRate {
    pub fn new(base_fee: Decimal, per_unit: Decimal) -> Self {
        Self { base_fee, per_unit }
    }
}

/// Flat international fee by destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalRates {
    /// Destination name -> flat fee
    pub destinations: BTreeMap<String, Decimal>,
    /// Fee for any destination not listed
    pub fallback: Decimal,
}

impl Default for InternationalRates {
    fn default() -> Self {
        let destinations = [
            ("USA", Decimal::new(3000, 2)),
            ("Europe", Decimal::new(3500, 2)),
            ("Asia", Decimal::new(4000, 2)),
        ]
        .into_iter()
        .map(|(name, fee)| (name.to_string(), fee))
        .collect();

        Self {
            destinations,
            fallback: Decimal::new(5000, 2),
        }
    }
}

/// Configuration for the built-in pricing rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Customer type -> discount rate (fraction of order amount)
    #[serde(default = "default_discount_rates")]
    pub discount_rates: BTreeMap<String, Decimal>,

    /// Shipping method -> weight-based fee
    #[serde(default = "default_weight_rates")]
    pub weight_rates: BTreeMap<String, WeightRate>,

    /// International flat fees
    #[serde(default)]
    pub international: InternationalRates,
}

fn default_discount_rates() -> BTreeMap<String, Decimal> {
    [
        ("Regular", Decimal::new(5, 2)),
        ("Premium", Decimal::new(10, 2)),
        ("VIP", Decimal::new(15, 2)),
        ("Student", Decimal::new(8, 2)),
        ("Senior", Decimal::new(7, 2)),
    ]
    .into_iter()
    .map(|(name, rate)| (name.to_string(), rate))
    .collect()
}

fn default_weight_rates() -> BTreeMap<String, WeightRate> {
    [
        ("Standard", WeightRate::new(Decimal::new(500, 2), Decimal::new(5, 1))),
        ("Express", WeightRate::new(Decimal::new(1500, 2), Decimal::new(10, 1))),
        ("Overnight", WeightRate::new(Decimal::new(2500, 2), Decimal::new(20, 1))),
    ]
    .into_iter()
    .map(|(name, rate)| (name.to_string(), rate))
    .collect()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount_rates: default_discount_rates(),
            weight_rates: default_weight_rates(),
            international: InternationalRates::default(),
        }
    }
}

impl PricingConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
