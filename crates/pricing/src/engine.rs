//! Pricing Engine - discount and shipping lookups over two registries
//!
//! Unknown customer types and shipping methods price as zero.

use crate::config::PricingConfig;
use crate::discount::PercentageDiscount;
use crate::registry::StrategyRegistry;
use crate::shipping::{InternationalShipping, WeightBasedShipping};
use crate::strategy::{DiscountStrategy, ShippingStrategy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price breakdown for one order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    /// `subtotal - discount + shipping`
    pub total: Decimal,
}

/// Discount and shipping calculator
#[derive(Debug)]
pub struct PricingEngine {
    discounts: StrategyRegistry<dyn DiscountStrategy>,
    shipping: StrategyRegistry<dyn ShippingStrategy>,
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine {
    /// Engine with the built-in rules at their default rates
    pub fn new() -> Self {
        Self::from_config(&PricingConfig::default())
    }

    /// Engine with no rules at all
    pub fn empty() -> Self {
        Self {
            discounts: StrategyRegistry::new("discount"),
            shipping: StrategyRegistry::new("shipping"),
        }
    }

    /// Engine with the built-in rules at configured rates
    pub fn from_config(config: &PricingConfig) -> Self {
        let mut engine = Self::empty();

        for (customer_type, rate) in &config.discount_rates {
            engine.add_discount_strategy(PercentageDiscount::new(customer_type.as_str(), *rate));
        }
        for (method, rate) in &config.weight_rates {
            engine.add_shipping_strategy(WeightBasedShipping::new(method.as_str(), *rate));
        }
        engine.add_shipping_strategy(InternationalShipping::new(config.international.clone()));

        engine
    }

    // === Lookups ===

    /// Discount for `customer_type`, zero if no rule is registered
    pub fn calculate_discount(&self, customer_type: &str, order_amount: Decimal) -> Decimal {
        self.discounts
            .get(customer_type)
            .map(|strategy| strategy.calculate_discount(order_amount))
            .unwrap_or(Decimal::ZERO)
    }

    /// Shipping cost for `method`, zero if no rule is registered
    pub fn calculate_shipping_cost(&self, method: &str, weight: Decimal, destination: &str) -> Decimal {
        self.shipping
            .get(method)
            .map(|strategy| strategy.calculate_shipping_cost(weight, destination))
            .unwrap_or(Decimal::ZERO)
    }

    /// Discount and shipping together
    pub fn quote(
        &self,
        customer_type: &str,
        order_amount: Decimal,
        method: &str,
        weight: Decimal,
        destination: &str,
    ) -> Quote {
        let discount = self.calculate_discount(customer_type, order_amount);
        let shipping = self.calculate_shipping_cost(method, weight, destination);

        Quote {
            subtotal: order_amount,
            discount,
            shipping,
            total: order_amount
                .saturating_sub(discount)
                .saturating_add(shipping),
        }
    }

    // === Registration ===

    /// Register under the strategy's customer type. Returns `true` if an
    /// existing rule was replaced.
    pub fn add_discount_strategy<S>(&mut self, strategy: S) -> bool
    where
        S: DiscountStrategy + 'static,
    {
        let key = strategy.customer_type().to_string();
        self.discounts.insert(key, Box::new(strategy))
    }

    /// Register under the strategy's shipping method. Returns `true` if an
    /// existing rule was replaced.
    pub fn add_shipping_strategy<S>(&mut self, strategy: S) -> bool
    where
        S: ShippingStrategy + 'static,
    {
        let key = strategy.shipping_method().to_string();
        self.shipping.insert(key, Box::new(strategy))
    }

    pub fn remove_discount_strategy(&mut self, customer_type: &str) -> bool {
        self.discounts.remove(customer_type)
    }

    pub fn remove_shipping_strategy(&mut self, method: &str) -> bool {
        self.shipping.remove(method)
    }

    /// Registered customer types, sorted
    pub fn list_discount_types(&self) -> Vec<String> {
        self.discounts.keys()
    }

    /// Registered shipping methods, sorted
    pub fn list_shipping_methods(&self) -> Vec<String> {
        self.shipping.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeightRate;
    use crate::strategy::{DiscountFn, ShippingFn};
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_discounts() {
        let engine = PricingEngine::new();
        let amount = dec!(1000);

        assert_eq!(engine.calculate_discount("Regular", amount), dec!(50.00));
        assert_eq!(engine.calculate_discount("Premium", amount), dec!(100.00));
        assert_eq!(engine.calculate_discount("VIP", amount), dec!(150.00));
        assert_eq!(engine.calculate_discount("Student", amount), dec!(80.00));
        assert_eq!(engine.calculate_discount("Senior", amount), dec!(70.00));
    }

    #[test]
    fn test_builtin_shipping() {
        let engine = PricingEngine::new();
        let weight = dec!(2);

        assert_eq!(engine.calculate_shipping_cost("Standard", weight, "USA"), dec!(6.00));
        assert_eq!(engine.calculate_shipping_cost("Express", weight, "Europe"), dec!(17.00));
        assert_eq!(engine.calculate_shipping_cost("Overnight", weight, "Asia"), dec!(29.00));
        assert_eq!(engine.calculate_shipping_cost("International", weight, "USA"), dec!(30.00));
        assert_eq!(engine.calculate_shipping_cost("International", weight, "Europe"), dec!(35.00));
    }

    #[test]
    fn test_unknown_keys_price_as_zero() {
        let engine = PricingEngine::new();

        assert_eq!(engine.calculate_discount("Unknown", dec!(1000)), Decimal::ZERO);
        assert_eq!(engine.calculate_shipping_cost("Unknown", dec!(2), "X"), Decimal::ZERO);
    }

    #[test]
    fn test_remove_vip() {
        let mut engine = PricingEngine::new();
        assert_eq!(engine.calculate_discount("VIP", dec!(1000)), dec!(150.00));

        assert!(engine.remove_discount_strategy("VIP"));
        assert_eq!(engine.calculate_discount("VIP", dec!(1000)), Decimal::ZERO);
        assert!(!engine.remove_discount_strategy("VIP"));
    }

    #[test]
    fn test_add_new_strategies() {
        let mut engine = PricingEngine::new();

        assert!(!engine.add_discount_strategy(DiscountFn::new("Corporate", |a| a * dec!(0.12))));
        assert!(!engine.add_shipping_strategy(ShippingFn::new("Drone", |w, d| {
            if d == "Local" {
                dec!(10.00) + w * dec!(3.0)
            } else {
                Decimal::ZERO
            }
        })));

        assert_eq!(engine.calculate_discount("Corporate", dec!(1000)), dec!(120));
        assert_eq!(engine.calculate_shipping_cost("Drone", dec!(2), "Local"), dec!(16.00));
        assert!(engine.list_discount_types().contains(&"Corporate".to_string()));
        assert!(engine.list_shipping_methods().contains(&"Drone".to_string()));
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut engine = PricingEngine::new();
        let before = engine.list_discount_types().len();

        assert!(engine.add_discount_strategy(PercentageDiscount::new("VIP", dec!(0.20))));

        assert_eq!(engine.list_discount_types().len(), before);
        assert_eq!(engine.calculate_discount("VIP", dec!(1000)), dec!(200));
    }

    #[test]
    fn test_list_keys() {
        let engine = PricingEngine::new();

        assert_eq!(
            engine.list_discount_types(),
            vec!["Premium", "Regular", "Senior", "Student", "VIP"]
        );
        assert_eq!(
            engine.list_shipping_methods(),
            vec!["Express", "International", "Overnight", "Standard"]
        );
    }

    #[test]
    fn test_empty_engine() {
        let engine = PricingEngine::empty();
        assert!(engine.list_discount_types().is_empty());
        assert_eq!(engine.calculate_discount("VIP", dec!(1000)), Decimal::ZERO);
    }

    #[test]
    fn test_from_config() {
        let mut config = PricingConfig::default();
        config.discount_rates.insert("Corporate".to_string(), dec!(0.12));
        config
            .weight_rates
            .insert("Economy".to_string(), WeightRate::new(dec!(2.00), dec!(0.25)));

        let engine = PricingEngine::from_config(&config);
        assert_eq!(engine.calculate_discount("Corporate", dec!(1000)), dec!(120));
        assert_eq!(engine.calculate_shipping_cost("Economy", dec!(4), "USA"), dec!(3.00));
    }

    #[test]
    fn test_quote() {
        let engine = PricingEngine::new();
        let quote = engine.quote("VIP", dec!(1000), "International", dec!(2), "Europe");

        assert_eq!(quote.discount, dec!(150));
        assert_eq!(quote.shipping, dec!(35));
        assert_eq!(quote.total, dec!(885));
    }
}
