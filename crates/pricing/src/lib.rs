//! # Solidkit Pricing
//!
//! Discount and shipping rules as pluggable strategies.
//!
//! New rules are added by registering a value that implements
//! [`DiscountStrategy`] or [`ShippingStrategy`] (or a closure wrapped in
//! [`DiscountFn`] / [`ShippingFn`]); the lookup code never changes.
//!
//! ```
//! use solidkit_pricing::{DiscountFn, PricingEngine};
//! use rust_decimal::Decimal;
//!
//! let mut engine = PricingEngine::new();
//! assert_eq!(
//!     engine.calculate_discount("VIP", Decimal::new(1000, 0)),
//!     Decimal::new(150, 0)
//! );
//!
//! engine.add_discount_strategy(DiscountFn::new("Corporate", |amount| {
//!     amount * Decimal::new(12, 2)
//! }));
//! assert_eq!(
//!     engine.calculate_discount("Corporate", Decimal::new(1000, 0)),
//!     Decimal::new(120, 0)
//! );
//! ```

pub mod config;
pub mod discount;
pub mod engine;
pub mod registry;
pub mod shared;
pub mod shipping;
pub mod strategy;

pub use config::{InternationalRates, PricingConfig, WeightRate};
pub use discount::PercentageDiscount;
pub use engine::{PricingEngine, Quote};
pub use registry::StrategyRegistry;
pub use shared::SharedPricingEngine;
pub use shipping::{InternationalShipping, WeightBasedShipping};
pub use strategy::{DiscountFn, DiscountStrategy, ShippingFn, ShippingStrategy};
