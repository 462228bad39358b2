//! Built-in discount rules

use crate::strategy::DiscountStrategy;
use rust_decimal::Decimal;

/// Discount as a fixed fraction of the order amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentageDiscount {
    customer_type: String,
    rate: Decimal,
}

impl PercentageDiscount {
    pub fn new(customer_type: impl Into<String>, rate: Decimal) -> Self {
        Self {
            customer_type: customer_type.into(),
            rate,
        }
    }

    /// 5%
    pub fn regular() -> Self {
        Self::new("Regular", Decimal::new(5, 2))
    }

    /// 10%
    pub fn premium() -> Self {
        Self::new("Premium", Decimal::new(10, 2))
    }

    /// 15%
    pub fn vip() -> Self {
        Self::new("VIP", Decimal::new(15, 2))
    }

    /// 8%
    pub fn student() -> Self {
        Self::new("Student", Decimal::new(8, 2))
    }

    /// 7%
    pub fn senior() -> Self {
        Self::new("Senior", Decimal::new(7, 2))
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn customer_type(&self) -> &str {
        &self.customer_type
    }

    fn calculate_discount(&self, order_amount: Decimal) -> Decimal {
        order_amount.saturating_mul(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_rates() {
        let cases = [
            (PercentageDiscount::regular(), dec!(50)),
            (PercentageDiscount::premium(), dec!(100)),
            (PercentageDiscount::vip(), dec!(150)),
            (PercentageDiscount::student(), dec!(80)),
            (PercentageDiscount::senior(), dec!(70)),
        ];

        for (rule, expected) in cases {
            assert_eq!(rule.calculate_discount(dec!(1000)), expected, "{}", rule.customer_type());
        }
    }

    #[test]
    fn test_exact_decimal() {
        let vip = PercentageDiscount::vip();
        assert_eq!(vip.calculate_discount(dec!(19.99)), dec!(2.9985));
    }

    #[test]
    fn test_huge_amount_saturates() {
        let vip = PercentageDiscount::new("Whale", dec!(2));
        assert_eq!(vip.calculate_discount(Decimal::MAX), Decimal::MAX);
    }
}
