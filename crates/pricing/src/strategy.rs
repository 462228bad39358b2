//! Strategy traits - interfaces for pricing rules

use rust_decimal::Decimal;
use std::fmt;

/// Discount rule for one customer type
pub trait DiscountStrategy: Send + Sync {
    /// Registry key, e.g. "VIP"
    fn customer_type(&self) -> &str;

    /// Discount granted on `order_amount`
    fn calculate_discount(&self, order_amount: Decimal) -> Decimal;
}

/// Shipping rule for one shipping method
pub trait ShippingStrategy: Send + Sync {
    /// Registry key, e.g. "Express"
    fn shipping_method(&self) -> &str;

    fn calculate_shipping_cost(&self, weight: Decimal, destination: &str) -> Decimal;
}

/// Discount rule backed by a closure
pub struct DiscountFn<F> {
    customer_type: String,
    compute: F,
}

impl<F> DiscountFn<F>
where
    F: Fn(Decimal) -> Decimal + Send + Sync,
{
    pub fn new(customer_type: impl Into<String>, compute: F) -> Self {
        Self {
            customer_type: customer_type.into(),
            compute,
        }
    }
}

impl<F> DiscountStrategy for DiscountFn<F>
where
    F: Fn(Decimal) -> Decimal + Send + Sync,
{
    fn customer_type(&self) -> &str {
        &self.customer_type
    }

    fn calculate_discount(&self, order_amount: Decimal) -> Decimal {
        (self.compute)(order_amount)
    }
}

impl<F> fmt::Debug for DiscountFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscountFn")
            .field("customer_type", &self.customer_type)
            .finish_non_exhaustive()
    }
}

/// Shipping rule backed by a closure
pub struct ShippingFn<F> {
    shipping_method: String,
    compute: F,
}

impl<F> ShippingFn<F>
where
    F: Fn(Decimal, &str) -> Decimal + Send + Sync,
{
    pub fn new(shipping_method: impl Into<String>, compute: F) -> Self {
        Self {
            shipping_method: shipping_method.into(),
            compute,
        }
    }
}

impl<F> ShippingStrategy for ShippingFn<F>
where
    F: Fn(Decimal, &str) -> Decimal + Send + Sync,
{
    fn shipping_method(&self) -> &str {
        &self.shipping_method
    }

    fn calculate_shipping_cost(&self, weight: Decimal, destination: &str) -> Decimal {
        (self.compute)(weight, destination)
    }
}

impl<F> fmt::Debug for ShippingFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShippingFn")
            .field("shipping_method", &self.shipping_method)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_discount_fn() {
        let birthday = DiscountFn::new("Birthday", |amount| amount * dec!(0.20));
        assert_eq!(birthday.customer_type(), "Birthday");
        assert_eq!(birthday.calculate_discount(dec!(1000)), dec!(200));
    }

    #[test]
    fn test_shipping_fn() {
        // Drones only fly inside the city
        let drone = ShippingFn::new("Drone", |weight, destination| {
            if destination == "Local" {
                dec!(10.00) + weight * dec!(3.0)
            } else {
                Decimal::ZERO
            }
        });

        assert_eq!(drone.shipping_method(), "Drone");
        assert_eq!(drone.calculate_shipping_cost(dec!(2), "Local"), dec!(16.00));
        assert_eq!(drone.calculate_shipping_cost(dec!(2), "Other"), Decimal::ZERO);
    }

    #[test]
    fn test_debug_hides_closure() {
        let rule = DiscountFn::new("Corporate", |amount| amount * dec!(0.12));
        let text = format!("{:?}", rule);
        assert!(text.contains("Corporate"));
    }
}
