//! Collaborator traits and their tracing-backed stubs
//!
//! None of the stubs reach a real payment provider, warehouse or mail
//! server; each one records what it would have done as a tracing event.

use crate::error::{OrderError, OrderResult};
use crate::order::{Order, OrderItem};
use rust_decimal::Decimal;

pub trait PaymentGateway {
    fn process_payment(&self, payment_method: &str, amount: Decimal) -> OrderResult<()>;
}

pub trait Inventory {
    fn update_inventory(&self, items: &[OrderItem]);
}

pub trait EmailService {
    fn send_email(&self, to: &str, subject: &str, body: &str);
}

pub trait SmsService {
    fn send_sms(&self, phone_number: &str, message: &str);
}

pub trait ReceiptPrinter {
    fn generate_receipt(&self, order: &Order);
}

/// Accepts any positive amount
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPaymentGateway;

impl PaymentGateway for TracingPaymentGateway {
    fn process_payment(&self, payment_method: &str, amount: Decimal) -> OrderResult<()> {
        if amount <= Decimal::ZERO {
            return Err(OrderError::InvalidAmount(amount));
        }
        tracing::info!(payment_method, amount = %amount, "Processing payment");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInventory;

impl Inventory for TracingInventory {
    fn update_inventory(&self, items: &[OrderItem]) {
        tracing::info!(items = items.len(), "Inventory updated");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEmailService;

impl EmailService for TracingEmailService {
    fn send_email(&self, to: &str, subject: &str, _body: &str) {
        tracing::info!(to, subject, "Sending email");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSmsService;

impl SmsService for TracingSmsService {
    fn send_sms(&self, phone_number: &str, message: &str) {
        tracing::info!(phone_number, message, "Sending SMS");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReceiptPrinter;

impl ReceiptPrinter for TracingReceiptPrinter {
    fn generate_receipt(&self, order: &Order) {
        tracing::info!(
            order_id = order.id(),
            total = %order.total_amount(),
            "Receipt generated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_rejects_non_positive() {
        let gateway = TracingPaymentGateway;
        assert!(gateway.process_payment("CreditCard", dec!(30)).is_ok());

        let err = gateway.process_payment("CreditCard", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, OrderError::InvalidAmount(_)));
        assert!(err.to_string().contains("Invalid order amount"));
    }
}
