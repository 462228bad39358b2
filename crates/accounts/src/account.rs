//! # Account Module
//!
//! Account variants and the capability traits transfers operate on.
//!
//! Capabilities are split so callers only ask for what they use:
//! - [`Withdraw`]: `can_withdraw` + `withdraw`
//! - [`Deposit`]: `deposit`
//! - [`Transferable`]: both, plus `balance`
//!
//! [`Account`] implements all three. Its withdrawal rule is chosen by
//! [`AccountKind`]:
//! - Savings: `balance - amount >= minimum_balance`
//! - Checking: `balance - amount >= -overdraft_limit`
//! - FixedDeposit: locked before maturity, then `amount <= balance`

use crate::config::AccountPolicy;
use crate::error::{AccountError, AccountResult, WithdrawalPolicy};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something money can be taken out of.
pub trait Withdraw {
    /// Pure check, no side effects
    fn can_withdraw(&self, amount: Decimal) -> bool;

    /// Take `amount` out, or fail without touching the balance
    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()>;
}

/// Something money can be put into.
pub trait Deposit {
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()>;
}

/// Both sides of a transfer.
pub trait Transferable: Withdraw + Deposit {
    fn balance(&self) -> Decimal;
}

/// Account variant with its own withdrawal limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Keeps a minimum balance
    Savings { minimum_balance: Decimal },
    /// May overdraw down to `-overdraft_limit`
    Checking { overdraft_limit: Decimal },
    /// Locked until `matures_at`
    FixedDeposit { matures_at: DateTime<Utc> },
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings { .. } => "savings",
            AccountKind::Checking { .. } => "checking",
            AccountKind::FixedDeposit { .. } => "fixed_deposit",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bank account.
///
/// Opened with a zero balance and changed only through [`Deposit`] and
/// [`Withdraw`].
///
/// # Examples
/// ```
/// use solidkit_accounts::{Account, Deposit, Transferable, Withdraw};
/// use rust_decimal::Decimal;
///
/// let mut savings = Account::savings();
/// savings.deposit(Decimal::new(1000, 0)).unwrap();
/// savings.withdraw(Decimal::new(200, 0)).unwrap();
/// assert_eq!(savings.balance(), Decimal::new(800, 0));
///
/// // 800 - 800 = 0 < 100
/// assert!(savings.withdraw(Decimal::new(800, 0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    kind: AccountKind,
    balance: Decimal,
    interest_rate: Decimal,
}

impl Account {
    /// Open an account with zero balance
    pub fn new(kind: AccountKind, interest_rate: Decimal) -> Self {
        Self {
            kind,
            balance: Decimal::ZERO,
            interest_rate,
        }
    }

    /// Savings account with the default policy
    pub fn savings() -> Self {
        Self::savings_with(&AccountPolicy::default())
    }

    pub fn savings_with(policy: &AccountPolicy) -> Self {
        Self::new(
            AccountKind::Savings {
                minimum_balance: policy.minimum_balance,
            },
            policy.base_interest_rate,
        )
    }

    /// Checking account with the default policy
    pub fn checking() -> Self {
        Self::checking_with(&AccountPolicy::default())
    }

    pub fn checking_with(policy: &AccountPolicy) -> Self {
        Self::new(
            AccountKind::Checking {
                overdraft_limit: policy.overdraft_limit,
            },
            policy.base_interest_rate,
        )
    }

    /// Fixed deposit maturing at `matures_at`, default policy
    pub fn fixed_deposit(matures_at: DateTime<Utc>) -> Self {
        Self::fixed_deposit_with(matures_at, &AccountPolicy::default())
    }

    pub fn fixed_deposit_with(matures_at: DateTime<Utc>, policy: &AccountPolicy) -> Self {
        Self::new(
            AccountKind::FixedDeposit { matures_at },
            policy.fixed_deposit_interest_rate,
        )
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Interest on the current balance, saturating at the decimal range
    pub fn calculate_interest(&self) -> Decimal {
        self.balance.saturating_mul(self.interest_rate)
    }

    /// Whether a fixed deposit has matured at `now` (always true otherwise)
    pub fn is_matured_at(&self, now: DateTime<Utc>) -> bool {
        match self.kind {
            AccountKind::FixedDeposit { matures_at } => now >= matures_at,
            _ => true,
        }
    }

    /// Evaluate the variant's withdrawal rule at `now`.
    ///
    /// Returns the violated rule on failure. Does not validate the sign of
    /// `amount`; see [`Account::can_withdraw_at`].
    pub fn check_withdrawal_at(
        &self,
        amount: Decimal,
        now: DateTime<Utc>,
    ) -> Result<(), WithdrawalPolicy> {
        let remaining = self.balance.checked_sub(amount);

        match self.kind {
            AccountKind::Savings { minimum_balance } => match remaining {
                Some(rest) if rest >= minimum_balance => Ok(()),
                _ => Err(WithdrawalPolicy::MinimumBalance {
                    minimum: minimum_balance,
                }),
            },
            AccountKind::Checking { overdraft_limit } => match remaining {
                Some(rest) if rest >= -overdraft_limit => Ok(()),
                _ => Err(WithdrawalPolicy::OverdraftLimit {
                    limit: overdraft_limit,
                }),
            },
            AccountKind::FixedDeposit { matures_at } => {
                if now < matures_at {
                    Err(WithdrawalPolicy::MaturityLock { matures_at })
                } else if amount <= self.balance {
                    Ok(())
                } else {
                    Err(WithdrawalPolicy::InsufficientFunds {
                        available: self.balance,
                    })
                }
            }
        }
    }

    /// `can_withdraw` against an explicit clock
    pub fn can_withdraw_at(&self, amount: Decimal, now: DateTime<Utc>) -> bool {
        amount > Decimal::ZERO && self.check_withdrawal_at(amount, now).is_ok()
    }

    /// `withdraw` against an explicit clock
    pub fn withdraw_at(&mut self, amount: Decimal, now: DateTime<Utc>) -> AccountResult<()> {
        ensure_positive(amount)?;

        self.check_withdrawal_at(amount, now)
            .map_err(|policy| AccountError::policy_violation(policy, amount))?;

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }
}

impl Withdraw for Account {
    fn can_withdraw(&self, amount: Decimal) -> bool {
        self.can_withdraw_at(amount, Utc::now())
    }

    fn withdraw(&mut self, amount: Decimal) -> AccountResult<()> {
        self.withdraw_at(amount, Utc::now())
    }
}

impl Deposit for Account {
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        ensure_positive(amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }
}

impl Transferable for Account {
    fn balance(&self) -> Decimal {
        self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.balance, self.kind)
    }
}

fn ensure_positive(amount: Decimal) -> AccountResult<()> {
    if amount <= Decimal::ZERO {
        return Err(AccountError::InvalidAmount(amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn funded(mut account: Account, amount: Decimal) -> Account {
        account.deposit(amount).unwrap();
        account
    }

    #[test]
    fn test_new_account_is_empty() {
        assert_eq!(Account::savings().balance(), Decimal::ZERO);
        assert_eq!(Account::checking().balance(), Decimal::ZERO);
        assert_eq!(Account::fixed_deposit(Utc::now()).balance(), Decimal::ZERO);
    }

    #[test]
    fn test_savings_minimum_balance() {
        let mut savings = funded(Account::savings(), dec!(1000));

        savings.withdraw(dec!(200)).unwrap();
        assert_eq!(savings.balance(), dec!(800));

        // 800 - 800 = 0 < 100
        let err = savings.withdraw(dec!(800)).unwrap_err();
        assert_eq!(
            err.policy(),
            Some(&WithdrawalPolicy::MinimumBalance { minimum: dec!(100) })
        );
        assert_eq!(savings.balance(), dec!(800));

        // 800 - 700 = 100, exactly at the minimum
        assert!(savings.can_withdraw(dec!(700)));
        assert!(!savings.can_withdraw(dec!(700.01)));
    }

    #[test]
    fn test_checking_overdraft() {
        let mut checking = Account::checking();

        checking.withdraw(dec!(500)).unwrap();
        assert_eq!(checking.balance(), dec!(-500));

        let err = checking.withdraw(dec!(1)).unwrap_err();
        assert_eq!(
            err.policy(),
            Some(&WithdrawalPolicy::OverdraftLimit { limit: dec!(500) })
        );
        assert_eq!(checking.balance(), dec!(-500));
    }

    #[test]
    fn test_fixed_deposit_locked_before_maturity() {
        let now = Utc::now();
        let matures_at = now + Duration::days(30);
        let mut fixed = funded(Account::fixed_deposit(matures_at), dec!(2000));

        assert!(!fixed.can_withdraw_at(dec!(0.01), now));
        let err = fixed.withdraw_at(dec!(500), now).unwrap_err();
        assert_eq!(
            err.policy(),
            Some(&WithdrawalPolicy::MaturityLock { matures_at })
        );
        assert_eq!(fixed.balance(), dec!(2000));
    }

    #[test]
    fn test_fixed_deposit_after_maturity() {
        let matures_at = Utc::now() - Duration::days(1);
        let mut fixed = funded(Account::fixed_deposit(matures_at), dec!(2000));

        // Maturity instant itself is unlocked
        assert!(fixed.can_withdraw_at(dec!(2000), matures_at));

        let err = fixed.withdraw(dec!(2000.01)).unwrap_err();
        assert_eq!(
            err.policy(),
            Some(&WithdrawalPolicy::InsufficientFunds {
                available: dec!(2000)
            })
        );

        fixed.withdraw(dec!(2000)).unwrap();
        assert_eq!(fixed.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_interest() {
        let savings = funded(Account::savings(), dec!(1000));
        assert_eq!(savings.calculate_interest(), dec!(10));

        let fixed = funded(Account::fixed_deposit(Utc::now()), dec!(1000));
        assert_eq!(fixed.calculate_interest(), dec!(50));
    }

    #[test]
    fn test_interest_saturates_on_large_rate() {
        let policy = AccountPolicy {
            base_interest_rate: dec!(2),
            ..AccountPolicy::default()
        };
        let savings = funded(Account::savings_with(&policy), Decimal::MAX);
        assert_eq!(savings.calculate_interest(), Decimal::MAX);

        let mut checking = Account::checking_with(&policy);
        checking.withdraw(dec!(500)).unwrap();
        assert_eq!(checking.calculate_interest(), dec!(-1000));
    }

    #[test]
    fn test_rejects_non_positive_amounts() {
        let mut checking = Account::checking();

        assert_eq!(
            checking.deposit(dec!(-10)),
            Err(AccountError::InvalidAmount(dec!(-10)))
        );
        assert_eq!(
            checking.withdraw(Decimal::ZERO),
            Err(AccountError::InvalidAmount(Decimal::ZERO))
        );
        assert!(!checking.can_withdraw(dec!(-10)));
        assert_eq!(checking.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_overflow() {
        let mut savings = funded(Account::savings(), Decimal::MAX);

        let err = savings.deposit(dec!(1)).unwrap_err();
        assert!(matches!(err, AccountError::BalanceOverflow { .. }));
        assert_eq!(savings.balance(), Decimal::MAX);
    }

    #[test]
    fn test_huge_withdrawal_is_a_policy_violation() {
        let mut checking = Account::checking();
        checking.withdraw(dec!(500)).unwrap();

        // -500 - MAX does not fit in a Decimal
        assert!(!checking.can_withdraw(Decimal::MAX));
        assert!(checking.withdraw(Decimal::MAX).unwrap_err().is_policy_violation());
    }

    #[test]
    fn test_custom_policy() {
        let policy = AccountPolicy {
            overdraft_limit: dec!(50),
            ..AccountPolicy::default()
        };
        let mut checking = Account::checking_with(&policy);

        assert!(checking.can_withdraw(dec!(50)));
        assert!(checking.withdraw(dec!(51)).unwrap_err().is_policy_violation());
    }

    #[test]
    fn test_kind_serialization() {
        let kind = AccountKind::Savings {
            minimum_balance: dec!(100),
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"type\":\"savings\""));

        let parsed: AccountKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, kind);
    }
}
