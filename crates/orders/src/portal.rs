//! Narrow order interfaces
//!
//! Customers edit their orders; fulfilment staff take payment and ship.
//! Each side only sees the trait it needs.

use crate::error::{OrderError, OrderResult};
use crate::order::{Order, OrderStatus};
use crate::repository::{InMemoryOrderRepository, OrderRepository};

/// Create, edit and cancel orders
pub trait OrderCrud {
    fn create_order(&mut self, order: Order) -> OrderResult<()>;
    fn update_order(&mut self, order: Order) -> OrderResult<()>;
    fn delete_order(&mut self, id: u32) -> OrderResult<()>;
}

/// Take payment and ship
pub trait OrderFulfilment {
    fn process_payment(&mut self, id: u32) -> OrderResult<()>;
    fn ship_order(&mut self, id: u32) -> OrderResult<()>;
}

/// Customer-facing side: CRUD only, never fulfilment
#[derive(Debug, Default)]
pub struct CustomerPortal<R: OrderRepository = InMemoryOrderRepository> {
    repository: R,
}

impl<R: OrderRepository> CustomerPortal<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn orders(&self) -> &[Order] {
        self.repository.all()
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    fn ensure_pending(&self, id: u32) -> OrderResult<()> {
        let order = self.repository.get(id).ok_or(OrderError::NotFound(id))?;
        match order.status() {
            OrderStatus::Pending => Ok(()),
            status => Err(OrderError::AlreadyProcessed { id, status }),
        }
    }
}

impl<R: OrderRepository> OrderCrud for CustomerPortal<R> {
    fn create_order(&mut self, order: Order) -> OrderResult<()> {
        self.repository.add(order)
    }

    fn update_order(&mut self, order: Order) -> OrderResult<()> {
        self.ensure_pending(order.id())?;
        if order.status() != OrderStatus::Pending {
            return Err(OrderError::AlreadyProcessed {
                id: order.id(),
                status: order.status(),
            });
        }
        self.repository.update(order)
    }

    fn delete_order(&mut self, id: u32) -> OrderResult<()> {
        self.ensure_pending(id)?;
        self.repository.remove(id).map(|_| ())
    }
}
