//! Account errors
//!
//! Withdrawal policy violations and transfer failures, via thiserror.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The withdrawal rule an account refused to break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum WithdrawalPolicy {
    /// Savings: resulting balance would drop below the minimum
    MinimumBalance { minimum: Decimal },
    /// Checking: resulting balance would pass the overdraft limit
    OverdraftLimit { limit: Decimal },
    /// Fixed deposit: funds are locked until maturity
    MaturityLock { matures_at: DateTime<Utc> },
    /// Fixed deposit after maturity: more than the balance was requested
    InsufficientFunds { available: Decimal },
}

impl fmt::Display for WithdrawalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawalPolicy::MinimumBalance { minimum } => {
                write!(f, "Cannot go below minimum balance of {}", minimum)
            }
            WithdrawalPolicy::OverdraftLimit { limit } => {
                write!(f, "Overdraft limit of {} exceeded", limit)
            }
            WithdrawalPolicy::MaturityLock { matures_at } => {
                write!(
                    f,
                    "Cannot withdraw before maturity date {}",
                    matures_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            WithdrawalPolicy::InsufficientFunds { available } => {
                write!(f, "Insufficient funds: available {}", available)
            }
        }
    }
}

/// Account operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    // === Business rule errors ===
    #[error("Policy violation: {policy} (requested {requested})")]
    PolicyViolation {
        policy: WithdrawalPolicy,
        requested: Decimal,
    },

    #[error("Transfer rejected: cannot withdraw {amount} from source account")]
    TransferRejected { amount: Decimal },

    // === Validation errors ===
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    #[error("Balance overflow: {balance} with amount {amount}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },

    // === Transfer protocol errors ===
    #[error("Compensation failed: {amount} could not be returned to source ({reason})")]
    CompensationFailed { amount: Decimal, reason: String },
}

/// Result type alias for account operations
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Create a policy violation error
    pub fn policy_violation(policy: WithdrawalPolicy, requested: Decimal) -> Self {
        Self::PolicyViolation { policy, requested }
    }

    /// Check if this is a withdrawal policy violation
    pub fn is_policy_violation(&self) -> bool {
        matches!(self, AccountError::PolicyViolation { .. })
    }

    /// Check if a transfer was rejected before any mutation
    pub fn is_transfer_rejected(&self) -> bool {
        matches!(self, AccountError::TransferRejected { .. })
    }

    /// The violated policy, if any
    pub fn policy(&self) -> Option<&WithdrawalPolicy> {
        match self {
            AccountError::PolicyViolation { policy, .. } => Some(policy),
            _ => None,
        }
    }
}
