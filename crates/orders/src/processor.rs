//! # Order Processor
//!
//! Runs a stored order through payment, stock update, confirmation and
//! receipt. Every collaborator is injected so each step can be replaced
//! independently.

use crate::error::{OrderError, OrderResult};
use crate::order::{Order, OrderStatus};
use crate::portal::OrderFulfilment;
use crate::repository::{InMemoryOrderRepository, OrderRepository};
use crate::services::{
    EmailService, Inventory, PaymentGateway, ReceiptPrinter, TracingEmailService,
    TracingInventory, TracingPaymentGateway, TracingReceiptPrinter,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Order count and revenue over every stored order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub total_orders: usize,
    pub total_revenue: Decimal,
}

impl fmt::Display for MonthlyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monthly Report: {} orders, Revenue: {}",
            self.total_orders, self.total_revenue
        )
    }
}

pub struct OrderProcessor<R: OrderRepository = InMemoryOrderRepository> {
    repository: R,
    payment: Arc<dyn PaymentGateway>,
    inventory: Arc<dyn Inventory>,
    email: Arc<dyn EmailService>,
    receipts: Arc<dyn ReceiptPrinter>,
}

impl OrderProcessor<InMemoryOrderRepository> {
    /// In-memory repository with tracing stubs for every collaborator
    pub fn new() -> Self {
        Self::with_repository(InMemoryOrderRepository::new())
    }
}

impl Default for OrderProcessor<InMemoryOrderRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: OrderRepository> OrderProcessor<R> {
    pub fn with_repository(repository: R) -> Self {
        Self {
            repository,
            payment: Arc::new(TracingPaymentGateway),
            inventory: Arc::new(TracingInventory),
            email: Arc::new(TracingEmailService),
            receipts: Arc::new(TracingReceiptPrinter),
        }
    }

    pub fn with_payment(mut self, payment: Arc<dyn PaymentGateway>) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_inventory(mut self, inventory: Arc<dyn Inventory>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_email(mut self, email: Arc<dyn EmailService>) -> Self {
        self.email = email;
        self
    }

    pub fn with_receipts(mut self, receipts: Arc<dyn ReceiptPrinter>) -> Self {
        self.receipts = receipts;
        self
    }

    pub fn add_order(&mut self, order: Order) -> OrderResult<()> {
        self.repository.add(order)
    }

    pub fn order(&self, id: u32) -> Option<&Order> {
        self.repository.get(id)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Process a pending order.
    ///
    /// Checks run before any collaborator is called, so a rejected order
    /// leaves no side effects. A payment failure stops the pipeline and the
    /// order stays pending.
    pub fn process_order(&mut self, id: u32) -> OrderResult<()> {
        let order = self.repository.get(id).ok_or(OrderError::NotFound(id))?;

        if order.status() != OrderStatus::Pending {
            return Err(OrderError::AlreadyProcessed {
                id,
                status: order.status(),
            });
        }
        if !order.is_valid() {
            return Err(OrderError::InvalidOrder(id));
        }
        let method = order
            .payment_method()
            .ok_or(OrderError::MissingPaymentMethod(id))?;

        self.payment.process_payment(method, order.total_amount())?;
        self.inventory.update_inventory(order.items());
        self.email.send_email(
            order.customer_email(),
            "Order Confirmation",
            &format!("Your order #{} has been processed", id),
        );
        tracing::info!(order_id = id, total = %order.total_amount(), "Order processed");
        self.receipts.generate_receipt(order);

        if let Some(order) = self.repository.get_mut(id) {
            order.mark_processed();
        }
        Ok(())
    }

    /// Revenue saturates at the decimal range
    pub fn monthly_report(&self) -> MonthlyReport {
        let orders = self.repository.all();
        MonthlyReport {
            total_orders: orders.len(),
            total_revenue: orders
                .iter()
                .fold(Decimal::ZERO, |total, order| {
                    total.saturating_add(order.total_amount())
                }),
        }
    }

    /// Write every order to `path` as a JSON array; returns the count
    pub fn export(&self, path: impl AsRef<Path>) -> OrderResult<usize> {
        let orders = self.repository.all();
        let json = serde_json::to_string_pretty(orders)?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(
            path = %path.as_ref().display(),
            count = orders.len(),
            "Orders exported"
        );
        Ok(orders.len())
    }
}

impl<R: OrderRepository> OrderFulfilment for OrderProcessor<R> {
    fn process_payment(&mut self, id: u32) -> OrderResult<()> {
        self.process_order(id)
    }

    fn ship_order(&mut self, id: u32) -> OrderResult<()> {
        let order = self
            .repository
            .get_mut(id)
            .ok_or(OrderError::NotFound(id))?;
        if order.status() != OrderStatus::Processed {
            return Err(OrderError::NotShippable {
                id,
                status: order.status(),
            });
        }
        order.mark_shipped();
        tracing::info!(order_id = id, "Order shipped");
        Ok(())
    }
}

impl<R: OrderRepository + fmt::Debug> fmt::Debug for OrderProcessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}
