//! Customer notifications

use crate::order::Order;
use crate::services::{EmailService, SmsService, TracingEmailService, TracingSmsService};
use std::sync::Arc;

/// Confirms placed orders over e-mail, and SMS when a phone is on file
#[derive(Clone)]
pub struct OrderService {
    email: Arc<dyn EmailService>,
    sms: Arc<dyn SmsService>,
}

impl OrderService {
    pub fn new(email: Arc<dyn EmailService>, sms: Arc<dyn SmsService>) -> Self {
        Self { email, sms }
    }

    pub fn place_order(&self, order: &Order) {
        tracing::debug!(order_id = order.id(), "Placing order");
        self.email.send_email(
            order.customer_email(),
            "Order Confirmation",
            "Your order has been placed",
        );
        if let Some(phone) = order.customer_phone() {
            self.sms.send_sms(phone, "Your order has been placed");
        }
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Arc::new(TracingEmailService), Arc::new(TracingSmsService))
    }
}

#[derive(Clone)]
pub struct NotificationService {
    email: Arc<dyn EmailService>,
}

impl NotificationService {
    pub fn new(email: Arc<dyn EmailService>) -> Self {
        Self { email }
    }

    pub fn send_promotion(&self, customer_email: &str, text: &str) {
        self.email.send_email(customer_email, "Special Promotion", text);
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(Arc::new(TracingEmailService))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Outbox {
        emails: Mutex<Vec<String>>,
        texts: Mutex<Vec<String>>,
    }

    impl EmailService for Outbox {
        fn send_email(&self, to: &str, subject: &str, _body: &str) {
            self.emails
                .lock()
                .unwrap()
                .push(format!("{}: {}", to, subject));
        }
    }

    impl SmsService for Outbox {
        fn send_sms(&self, phone_number: &str, message: &str) {
            self.texts
                .lock()
                .unwrap()
                .push(format!("{}: {}", phone_number, message));
        }
    }

    #[test]
    fn test_place_order_without_phone_sends_email_only() {
        let outbox = Arc::new(Outbox::default());
        let service = OrderService::new(outbox.clone(), outbox.clone());

        service.place_order(&Order::new(1, "a@test.com"));

        assert_eq!(
            outbox.emails.lock().unwrap().as_slice(),
            &["a@test.com: Order Confirmation".to_string()]
        );
        assert!(outbox.texts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_place_order_with_phone_sends_sms() {
        let outbox = Arc::new(Outbox::default());
        let service = OrderService::new(outbox.clone(), outbox.clone());

        service.place_order(&Order::new(2, "b@test.com").with_phone("+1234567890"));

        assert_eq!(outbox.emails.lock().unwrap().len(), 1);
        assert_eq!(
            outbox.texts.lock().unwrap().as_slice(),
            &["+1234567890: Your order has been placed".to_string()]
        );
    }

    #[test]
    fn test_send_promotion() {
        let outbox = Arc::new(Outbox::default());
        let notifications = NotificationService::new(outbox.clone());

        notifications.send_promotion("c@test.com", "20% off this week");

        assert_eq!(
            outbox.emails.lock().unwrap().as_slice(),
            &["c@test.com: Special Promotion".to_string()]
        );
    }
}
