//! Order errors

use crate::order::OrderStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Order operation errors
#[derive(Debug, Error)]
pub enum OrderError {
    // === Lookup errors ===
    #[error("Order not found: {0}")]
    NotFound(u32),

    #[error("Order already exists: {0}")]
    AlreadyExists(u32),

    // === State errors ===
    #[error("Cannot change order {id} after processing (status: {status})")]
    AlreadyProcessed { id: u32, status: OrderStatus },

    #[error("Order {id} cannot be shipped (status: {status})")]
    NotShippable { id: u32, status: OrderStatus },

    // === Validation errors ===
    #[error("Invalid order {0}: needs a positive total and a customer email")]
    InvalidOrder(u32),

    #[error("Order {0} has no payment method")]
    MissingPaymentMethod(u32),

    #[error("Invalid order amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Order {id} total overflows when adding {price}")]
    TotalOverflow { id: u32, price: Decimal },

    // === Wrapped errors ===
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for order operations
pub type OrderResult<T> = Result<T, OrderError>;

impl OrderError {
    /// Check if the order could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::NotFound(_))
    }

    /// Check if the order is past the point where it can change
    pub fn is_already_processed(&self) -> bool {
        matches!(self, OrderError::AlreadyProcessed { .. })
    }
}
