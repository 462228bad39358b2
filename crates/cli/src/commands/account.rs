//! Account commands

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use solidkit_accounts::{Account, AccountPolicy, Deposit, Transferable};

use crate::AccountKindArg;

/// Interest on `balance` for a freshly opened account of the given kind
pub fn interest(
    policy: &AccountPolicy,
    kind: AccountKindArg,
    balance: Decimal,
    matures_in_days: i64,
    json: bool,
) -> Result<()> {
    let mut account = match kind {
        AccountKindArg::Savings => Account::savings_with(policy),
        AccountKindArg::Checking => Account::checking_with(policy),
        AccountKindArg::FixedDeposit => {
            Account::fixed_deposit_with(maturity_after(matures_in_days)?, policy)
        }
    };
    if balance > Decimal::ZERO {
        account.deposit(balance).context("Failed to fund account")?;
    }

    let interest = account.calculate_interest();
    if json {
        let value = json!({
            "kind": account.kind().as_str(),
            "balance": account.balance(),
            "interest_rate": account.interest_rate(),
            "interest": interest,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Account:  {}", account.kind());
    println!("Rate:     {}", account.interest_rate());
    println!("Interest: {:.2}", interest);
    Ok(())
}

/// Maturity date `days` from now
fn maturity_after(days: i64) -> Result<DateTime<Utc>> {
    Duration::try_days(days)
        .and_then(|delta| Utc::now().checked_add_signed(delta))
        .with_context(|| format!("Maturity {} days from now is out of range", days))
}
