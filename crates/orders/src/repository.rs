//! Order storage

use crate::error::{OrderError, OrderResult};
use crate::order::Order;

/// Order storage interface
pub trait OrderRepository {
    /// Store a new order; ids are unique
    fn add(&mut self, order: Order) -> OrderResult<()>;

    /// Replace a stored order with the same id
    fn update(&mut self, order: Order) -> OrderResult<()>;

    fn remove(&mut self, id: u32) -> OrderResult<Order>;

    fn get(&self, id: u32) -> Option<&Order>;

    fn get_mut(&mut self, id: u32) -> Option<&mut Order>;

    /// All orders in insertion order
    fn all(&self) -> &[Order];
}

/// Vec-backed repository, lives for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.orders.iter().position(|order| order.id() == id)
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn add(&mut self, order: Order) -> OrderResult<()> {
        if self.position(order.id()).is_some() {
            return Err(OrderError::AlreadyExists(order.id()));
        }
        tracing::info!(order_id = order.id(), "Order added");
        self.orders.push(order);
        Ok(())
    }

    fn update(&mut self, order: Order) -> OrderResult<()> {
        let index = self
            .position(order.id())
            .ok_or(OrderError::NotFound(order.id()))?;
        tracing::debug!(order_id = order.id(), "Order updated");
        self.orders[index] = order;
        Ok(())
    }

    fn remove(&mut self, id: u32) -> OrderResult<Order> {
        let index = self.position(id).ok_or(OrderError::NotFound(id))?;
        tracing::debug!(order_id = id, "Order removed");
        Ok(self.orders.remove(index))
    }

    fn get(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == id)
    }

    fn all(&self) -> &[Order] {
        &self.orders
    }
}
