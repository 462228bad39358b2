//! Scripted walkthroughs of the three libraries

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::PathBuf;
use std::sync::Arc;

use solidkit_accounts::{
    Account, AccountPolicy, Bank, BankTransferService, Deposit, NotificationSink, Transferable,
};
use solidkit_orders::{
    CustomerPortal, EmailService, InMemoryOrderRepository, NotificationService, Order, OrderCrud,
    OrderProcessor, OrderService, TracingEmailService, TracingSmsService,
};
use solidkit_pricing::{DiscountFn, PricingConfig, PricingEngine, ShippingFn};

use crate::config::SolidkitConfig;
use crate::DemoArg;

/// Prints bank messages to stdout
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, message: &str) {
        println!("  {}", message);
    }
}

/// Prints e-mails instead of sending them
struct ConsoleEmail;

impl EmailService for ConsoleEmail {
    fn send_email(&self, to: &str, subject: &str, _body: &str) {
        println!("  [console] email to {}: {}", to, subject);
    }
}

pub fn run(config: &SolidkitConfig, which: DemoArg) -> Result<()> {
    if matches!(which, DemoArg::Bank | DemoArg::All) {
        bank(&config.accounts)?;
    }
    if matches!(which, DemoArg::Pricing | DemoArg::All) {
        pricing(&config.pricing);
    }
    if matches!(which, DemoArg::Orders | DemoArg::All) {
        orders()?;
    }
    Ok(())
}

fn bank(policy: &AccountPolicy) -> Result<()> {
    println!("\n=== Accounts ===");

    let bank = Bank::with_parts(BankTransferService, ConsoleSink);
    let mut savings = Account::savings_with(policy);
    let mut checking = Account::checking_with(policy);
    let mut fixed = Account::fixed_deposit_with(Utc::now() + Duration::days(30), policy);

    savings.deposit(dec!(1000)).context("Failed to fund savings")?;
    checking.deposit(dec!(500)).context("Failed to fund checking")?;
    fixed.deposit(dec!(2000)).context("Failed to fund fixed deposit")?;
    print_balances(&[("Savings", &savings), ("Checking", &checking), ("Fixed", &fixed)]);

    println!("\nSavings withdrawals:");
    bank.process_withdrawal(&mut savings, dec!(200)).ok();
    bank.process_withdrawal(&mut savings, dec!(800)).ok();

    println!("\nTransfer savings -> checking:");
    bank.transfer(&mut savings, &mut checking, dec!(300)).ok();
    print_balances(&[("Savings", &savings), ("Checking", &checking)]);

    println!("\nFixed deposit before maturity:");
    bank.process_withdrawal(&mut fixed, dec!(500)).ok();

    println!("\nInterest:");
    for (name, account) in [("Savings", &savings), ("Checking", &checking), ("Fixed", &fixed)] {
        println!("  {:<9} {:.2}", name, account.calculate_interest());
    }
    Ok(())
}

fn print_balances(accounts: &[(&str, &Account)]) {
    println!("Balances:");
    for (name, account) in accounts {
        println!("  {:<9} {:.2}", name, account.balance());
    }
}

fn pricing(config: &PricingConfig) {
    println!("\n=== Pricing ===");

    let mut engine = PricingEngine::from_config(config);
    let amount = dec!(1000);

    println!("Discounts on {:.2}:", amount);
    for customer_type in engine.list_discount_types() {
        println!(
            "  {:<9} {:.2}",
            customer_type,
            engine.calculate_discount(&customer_type, amount)
        );
    }

    println!("\nShipping for 2kg:");
    for (method, destination) in [
        ("Standard", "USA"),
        ("Express", "Europe"),
        ("Overnight", "Asia"),
        ("International", "USA"),
    ] {
        println!(
            "  {} ({}): {:.2}",
            method,
            destination,
            engine.calculate_shipping_cost(method, dec!(2), destination)
        );
    }

    println!("\nRegistering new rules:");
    engine.add_discount_strategy(DiscountFn::new("Corporate", |amount| amount * dec!(0.12)));
    engine.add_discount_strategy(DiscountFn::new("Birthday", |amount| amount * dec!(0.20)));
    engine.add_shipping_strategy(ShippingFn::new("Drone", |weight, destination| {
        if destination == "Local" {
            dec!(10.00) + weight * dec!(3.0)
        } else {
            Decimal::ZERO
        }
    }));
    println!("  Corporate: {:.2}", engine.calculate_discount("Corporate", amount));
    println!("  Birthday: {:.2}", engine.calculate_discount("Birthday", amount));
    println!(
        "  Drone (Local): {:.2}",
        engine.calculate_shipping_cost("Drone", dec!(2), "Local")
    );
    println!(
        "  Drone (Other): {:.2}",
        engine.calculate_shipping_cost("Drone", dec!(2), "Other")
    );
    println!("  Discount types: {}", engine.list_discount_types().join(", "));

    engine.remove_discount_strategy("Student");
    println!(
        "\nStudent after removal: {:.2}",
        engine.calculate_discount("Student", amount)
    );
}

fn orders() -> Result<()> {
    println!("\n=== Orders ===");

    let mut order = Order::new(1, "customer@email.com");
    order.add_item("Laptop", dec!(1000))?;
    order.add_item("Mouse", dec!(50))?;
    order.set_payment_method("CreditCard")?;
    println!("{}", order);
    println!("  Valid: {}", order.is_valid());

    order.mark_processed();
    if let Err(e) = order.set_payment_method("PayPal") {
        println!("  Changing payment after processing: {}", e);
    }

    println!("\nCustomer portal:");
    let mut portal = CustomerPortal::new(InMemoryOrderRepository::new());
    let mut draft = Order::new(2, "portal@user.com");
    draft.add_item("Lamp", dec!(40))?;
    portal.create_order(draft.clone())?;
    portal.update_order(draft)?;
    portal.delete_order(2)?;
    println!("  Created, updated and deleted order #2");

    println!("\nProcessor:");
    let mut processor = OrderProcessor::new();
    let mut first = Order::new(3, "test1@email.com");
    first.add_item("Book", dec!(25))?;
    first.add_item("Pen", dec!(5))?;
    first.set_payment_method("CreditCard")?;
    let mut second = Order::new(4, "test2@email.com");
    second.add_item("Monitor", dec!(300))?;
    second.set_payment_method("PayPal")?;
    processor.add_order(first)?;
    processor.add_order(second)?;

    processor.process_order(3)?;
    println!("  {}", processor.monthly_report());

    let (exported, path) = export_to_scratch(&processor)?;
    println!("  Exported {} orders to {} (removed)", exported, path.display());

    println!("\nNotifications:");
    let email: Arc<dyn EmailService> = Arc::new(TracingEmailService);
    let sms = Arc::new(TracingSmsService);
    let customer = Order::new(5, "dip@test.com").with_phone("+1234567890");

    OrderService::new(email.clone(), sms.clone()).place_order(&customer);
    NotificationService::new(email).send_promotion("customer@email.com", "20% off everything");
    OrderService::new(Arc::new(ConsoleEmail), sms).place_order(&customer);
    Ok(())
}

/// Export into a scratch directory that is deleted before returning
fn export_to_scratch(processor: &OrderProcessor) -> Result<(usize, PathBuf)> {
    let dir = tempfile::tempdir().context("Failed to create export directory")?;
    let path = dir.path().join("orders.json");
    let exported = processor.export(&path)?;
    dir.close().context("Failed to remove export directory")?;
    Ok((exported, path))
}
