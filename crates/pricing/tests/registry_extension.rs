//! Integration tests: extending the pricing engine without touching its code

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use solidkit_pricing::{
    DiscountStrategy, PercentageDiscount, PricingConfig, PricingEngine, ShippingStrategy,
};

/// Discount defined outside the crate
struct CorporateDiscount;

impl DiscountStrategy for CorporateDiscount {
    fn customer_type(&self) -> &str {
        "Corporate"
    }

    fn calculate_discount(&self, order_amount: Decimal) -> Decimal {
        order_amount * dec!(0.12)
    }
}

/// Shipping defined outside the crate; only delivers locally
struct DroneShipping;

impl ShippingStrategy for DroneShipping {
    fn shipping_method(&self) -> &str {
        "Drone"
    }

    fn calculate_shipping_cost(&self, weight: Decimal, destination: &str) -> Decimal {
        if destination == "Local" {
            dec!(10.00) + weight * dec!(3.0)
        } else {
            Decimal::ZERO
        }
    }
}

#[test]
fn test_defaults_scenario() {
    let engine = PricingEngine::new();

    assert_eq!(engine.calculate_discount("VIP", dec!(1000)), dec!(150.00));
    assert_eq!(engine.calculate_discount("Unknown", dec!(1000)), Decimal::ZERO);
    assert_eq!(
        engine.calculate_shipping_cost("Unknown", dec!(2), "X"),
        Decimal::ZERO
    );
}

#[test]
fn test_international_ignores_weight() {
    let engine = PricingEngine::new();

    for weight in [dec!(0.5), dec!(2), dec!(40)] {
        assert_eq!(
            engine.calculate_shipping_cost("International", weight, "Europe"),
            dec!(35.00)
        );
    }
}

#[test]
fn test_extend_remove_and_list() {
    let mut engine = PricingEngine::new();
    let amount = dec!(1000);

    engine.add_discount_strategy(CorporateDiscount);
    engine.add_discount_strategy(PercentageDiscount::new("Birthday", dec!(0.20)));
    engine.add_shipping_strategy(DroneShipping);

    assert_eq!(engine.calculate_discount("Corporate", amount), dec!(120));
    assert_eq!(engine.calculate_discount("Birthday", amount), dec!(200));
    assert_eq!(engine.calculate_shipping_cost("Drone", dec!(2), "Local"), dec!(16.00));
    assert_eq!(engine.calculate_shipping_cost("Drone", dec!(2), "Other"), Decimal::ZERO);

    assert_eq!(
        engine.list_discount_types(),
        vec!["Birthday", "Corporate", "Premium", "Regular", "Senior", "Student", "VIP"]
    );

    assert!(engine.remove_discount_strategy("Student"));
    assert_eq!(engine.calculate_discount("Student", amount), Decimal::ZERO);
    assert!(!engine.list_discount_types().contains(&"Student".to_string()));

    assert!(engine.remove_shipping_strategy("Drone"));
    assert!(!engine.remove_shipping_strategy("Drone"));
}

#[test]
fn test_registering_same_key_twice() {
    let mut engine = PricingEngine::empty();

    assert!(!engine.add_discount_strategy(PercentageDiscount::new("VIP", dec!(0.15))));
    assert!(engine.add_discount_strategy(PercentageDiscount::new("VIP", dec!(0.30))));

    assert_eq!(engine.list_discount_types(), vec!["VIP"]);
    assert_eq!(engine.calculate_discount("VIP", dec!(100)), dec!(30));
}

#[test]
fn test_config_file_drives_builtins() {
    let json = r#"{
        "discount_rates": { "VIP": "0.25" },
        "weight_rates": { "Standard": { "base_fee": "4.00", "per_unit": "0.75" } }
    }"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing.json");
    std::fs::write(&path, json).unwrap();

    let config = PricingConfig::from_file(&path).unwrap();
    let engine = PricingEngine::from_config(&config);

    assert_eq!(engine.calculate_discount("VIP", dec!(1000)), dec!(250));
    assert_eq!(engine.calculate_discount("Regular", dec!(1000)), Decimal::ZERO);
    assert_eq!(engine.calculate_shipping_cost("Standard", dec!(4), "USA"), dec!(7.00));
    assert_eq!(engine.calculate_shipping_cost("Express", dec!(4), "USA"), Decimal::ZERO);
    assert_eq!(
        engine.calculate_shipping_cost("International", dec!(4), "Asia"),
        dec!(40.00)
    );
}
