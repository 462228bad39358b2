//! Thread-safe handle to a pricing engine
//!
//! Lookups take the read lock, registration and removal take the write lock.

use crate::engine::{PricingEngine, Quote};
use crate::strategy::{DiscountStrategy, ShippingStrategy};
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable, lock-guarded [`PricingEngine`]
#[derive(Debug, Clone, Default)]
pub struct SharedPricingEngine {
    inner: Arc<RwLock<PricingEngine>>,
}

impl SharedPricingEngine {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    // Registry updates are single map calls, so a poisoned engine is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, PricingEngine> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PricingEngine> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn calculate_discount(&self, customer_type: &str, order_amount: Decimal) -> Decimal {
        self.read().calculate_discount(customer_type, order_amount)
    }

    pub fn calculate_shipping_cost(&self, method: &str, weight: Decimal, destination: &str) -> Decimal {
        self.read().calculate_shipping_cost(method, weight, destination)
    }

    pub fn quote(
        &self,
        customer_type: &str,
        order_amount: Decimal,
        method: &str,
        weight: Decimal,
        destination: &str,
    ) -> Quote {
        self.read()
            .quote(customer_type, order_amount, method, weight, destination)
    }

    pub fn add_discount_strategy<S>(&self, strategy: S) -> bool
    where
        S: DiscountStrategy + 'static,
    {
        self.write().add_discount_strategy(strategy)
    }

    pub fn add_shipping_strategy<S>(&self, strategy: S) -> bool
    where
        S: ShippingStrategy + 'static,
    {
        self.write().add_shipping_strategy(strategy)
    }

    pub fn remove_discount_strategy(&self, customer_type: &str) -> bool {
        self.write().remove_discount_strategy(customer_type)
    }

    pub fn remove_shipping_strategy(&self, method: &str) -> bool {
        self.write().remove_shipping_strategy(method)
    }

    pub fn list_discount_types(&self) -> Vec<String> {
        self.read().list_discount_types()
    }

    pub fn list_shipping_methods(&self) -> Vec<String> {
        self.read().list_shipping_methods()
    }
}

impl From<PricingEngine> for SharedPricingEngine {
    fn from(engine: PricingEngine) -> Self {
        Self::new(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::PercentageDiscount;
    use rust_decimal_macros::dec;
    use std::thread;

    #[test]
    fn test_shared_lookup() {
        let shared = SharedPricingEngine::default();
        assert_eq!(shared.calculate_discount("VIP", dec!(1000)), dec!(150));
        assert_eq!(
            shared.calculate_shipping_cost("International", dec!(2), "Europe"),
            dec!(35)
        );
    }

    #[test]
    fn test_clones_share_registry() {
        let shared = SharedPricingEngine::new(PricingEngine::new());
        let other = shared.clone();

        other.add_discount_strategy(PercentageDiscount::new("Corporate", dec!(0.12)));
        assert_eq!(shared.calculate_discount("Corporate", dec!(1000)), dec!(120));

        assert!(shared.remove_discount_strategy("Corporate"));
        assert!(!other.list_discount_types().contains(&"Corporate".to_string()));
    }

    #[test]
    fn test_concurrent_registration() {
        let shared = SharedPricingEngine::new(PricingEngine::empty());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = shared.clone();
                thread::spawn(move || {
                    engine.add_discount_strategy(PercentageDiscount::new(
                        format!("Tier{}", i),
                        dec!(0.01),
                    ));
                    engine.calculate_discount("Tier0", dec!(100))
                })
            })
            .collect();

        for handle in handles {
            let discount = handle.join().unwrap();
            assert!(discount == Decimal::ZERO || discount == dec!(1));
        }

        assert_eq!(shared.list_discount_types().len(), 8);
    }
}
