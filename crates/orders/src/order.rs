//! # Order Module
//!
//! The order entity. It only knows its own data and state; storage,
//! payment and notifications live elsewhere.

use crate::error::{OrderError, OrderResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Editable, not yet paid
    Pending,
    /// Paid, stock updated, receipt issued
    Processed,
    /// Handed to the carrier
    Shipped,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processed => "processed",
            OrderStatus::Shipped => "shipped",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: Decimal,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: u32,
    customer_email: String,
    customer_phone: Option<String>,
    payment_method: Option<String>,
    items: Vec<OrderItem>,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
    status: OrderStatus,
}

impl Order {
    /// New pending order with no items
    pub fn new(id: u32, customer_email: impl Into<String>) -> Self {
        Self {
            id,
            customer_email: customer_email.into(),
            customer_phone: None,
            payment_method: None,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            created_at: Utc::now(),
            status: OrderStatus::Pending,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Add an item; the total grows by `price`. The order is unchanged if
    /// the new total does not fit.
    pub fn add_item(&mut self, name: impl Into<String>, price: Decimal) -> OrderResult<()> {
        self.total_amount = self
            .total_amount
            .checked_add(price)
            .ok_or(OrderError::TotalOverflow { id: self.id, price })?;
        self.items.push(OrderItem {
            name: name.into(),
            price,
        });
        Ok(())
    }

    /// Only allowed while pending
    pub fn set_payment_method(&mut self, method: impl Into<String>) -> OrderResult<()> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::AlreadyProcessed {
                id: self.id,
                status: self.status,
            });
        }
        self.payment_method = Some(method.into());
        Ok(())
    }

    pub fn mark_processed(&mut self) {
        self.status = OrderStatus::Processed;
    }

    pub fn mark_shipped(&mut self) {
        self.status = OrderStatus::Shipped;
    }

    /// Positive total and a customer email
    pub fn is_valid(&self) -> bool {
        self.total_amount > Decimal::ZERO && !self.customer_email.is_empty()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn customer_phone(&self) -> Option<&str> {
        self.customer_phone.as_deref()
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} ({}, {} items, total {})",
            self.id,
            self.status,
            self.items.len(),
            self.total_amount
        )
    }
}
