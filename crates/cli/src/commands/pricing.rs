//! Pricing commands: discount, shipping, quote, strategies

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use solidkit_pricing::{PricingConfig, PricingEngine};

#[derive(Serialize)]
struct Amount<'a> {
    rule: &'a str,
    amount: Decimal,
}

#[derive(Serialize)]
struct StrategyList {
    discount_types: Vec<String>,
    shipping_methods: Vec<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Discount for one customer type
pub fn discount(config: &PricingConfig, customer_type: &str, amount: Decimal, json: bool) -> Result<()> {
    let engine = PricingEngine::from_config(config);
    let discount = engine.calculate_discount(customer_type, amount);

    if json {
        return print_json(&Amount {
            rule: customer_type,
            amount: discount,
        });
    }
    println!("{} discount on {:.2}: {:.2}", customer_type, amount, discount);
    Ok(())
}

/// Shipping cost for one method
pub fn shipping(
    config: &PricingConfig,
    method: &str,
    weight: Decimal,
    destination: &str,
    json: bool,
) -> Result<()> {
    let engine = PricingEngine::from_config(config);
    let cost = engine.calculate_shipping_cost(method, weight, destination);

    if json {
        return print_json(&Amount {
            rule: method,
            amount: cost,
        });
    }
    println!("{} to {} ({}kg): {:.2}", method, destination, weight, cost);
    Ok(())
}

/// Discount and shipping together
pub fn quote(
    config: &PricingConfig,
    customer_type: &str,
    amount: Decimal,
    method: &str,
    weight: Decimal,
    destination: &str,
    json: bool,
) -> Result<()> {
    let engine = PricingEngine::from_config(config);
    let quote = engine.quote(customer_type, amount, method, weight, destination);

    if json {
        return print_json(&quote);
    }
    println!("Subtotal:  {:>10.2}", quote.subtotal);
    println!("Discount:  {:>10.2}  ({})", quote.discount, customer_type);
    println!("Shipping:  {:>10.2}  ({}, {})", quote.shipping, method, destination);
    println!("Total:     {:>10.2}", quote.total);
    Ok(())
}

/// Registered rule names
pub fn strategies(config: &PricingConfig, json: bool) -> Result<()> {
    let engine = PricingEngine::from_config(config);
    let list = StrategyList {
        discount_types: engine.list_discount_types(),
        shipping_methods: engine.list_shipping_methods(),
    };

    if json {
        return print_json(&list);
    }
    println!("Discount types:");
    for name in &list.discount_types {
        println!("  - {}", name);
    }
    println!("Shipping methods:");
    for name in &list.shipping_methods {
        println!("  - {}", name);
    }
    Ok(())
}
