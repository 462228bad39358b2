//! Account policy configuration
//!
//! Limits and interest rates used when opening accounts. Every field has a
//! default, so a partial JSON file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits and rates applied to newly opened accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Savings accounts cannot drop below this balance
    #[serde(default = "default_minimum_balance")]
    pub minimum_balance: Decimal,

    /// Checking accounts may go this far below zero
    #[serde(default = "default_overdraft_limit")]
    pub overdraft_limit: Decimal,

    /// Interest rate for savings and checking (fraction of balance)
    #[serde(default = "default_base_interest_rate")]
    pub base_interest_rate: Decimal,

    /// Interest rate for fixed deposits
    #[serde(default = "default_fixed_deposit_interest_rate")]
    pub fixed_deposit_interest_rate: Decimal,
}

fn default_minimum_balance() -> Decimal {
    Decimal::new(100, 0)
}

fn default_overdraft_limit() -> Decimal {
    Decimal::new(500, 0)
}

fn default_base_interest_rate() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_fixed_deposit_interest_rate() -> Decimal {
    Decimal::new(5, 2) // 0.05
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            minimum_balance: default_minimum_balance(),
            overdraft_limit: default_overdraft_limit(),
            base_interest_rate: default_base_interest_rate(),
            fixed_deposit_interest_rate: default_fixed_deposit_interest_rate(),
        }
    }
}

impl AccountPolicy {
    /// Load policy from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
