//! # Solidkit Orders
//!
//! Order entity and the collaborators around it:
//! - `Order`: items, total, status, payment method
//! - `OrderRepository`: in-memory storage
//! - `PaymentGateway`, `Inventory`, `EmailService`, `SmsService`,
//!   `ReceiptPrinter`: injected collaborators (tracing stubs by default)
//! - `OrderProcessor`: processes stored orders, monthly report, export
//! - `OrderService` / `NotificationService`: customer notifications
//! - `OrderCrud` / `OrderFulfilment`: narrow interfaces for each caller

pub mod error;
pub mod notification;
pub mod order;
pub mod portal;
pub mod processor;
pub mod repository;
pub mod services;

pub use error::{OrderError, OrderResult};
pub use notification::{NotificationService, OrderService};
pub use order::{Order, OrderItem, OrderStatus};
pub use portal::{CustomerPortal, OrderCrud, OrderFulfilment};
pub use processor::{MonthlyReport, OrderProcessor};
pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use services::{
    EmailService, Inventory, PaymentGateway, ReceiptPrinter, SmsService, TracingEmailService,
    TracingInventory, TracingPaymentGateway, TracingReceiptPrinter, TracingSmsService,
};
