//! Transfers between accounts
//!
//! Protocol:
//! 1. non-positive amounts are `InvalidAmount`; otherwise
//!    `from.can_withdraw(amount)` or reject before touching anything
//! 2. withdraw from source
//! 3. deposit into destination
//! 4. on deposit failure, deposit back into source and return the deposit error

use crate::account::Transferable;
use crate::error::{AccountError, AccountResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moves money between two [`Transferable`]s.
pub trait TransferService {
    /// Transfer or fail with no net balance change
    fn transfer(
        &self,
        from: &mut dyn Transferable,
        to: &mut dyn Transferable,
        amount: Decimal,
    ) -> AccountResult<TransferReceipt>;

    /// Same as `transfer`, reported as a flag
    fn try_transfer(
        &self,
        from: &mut dyn Transferable,
        to: &mut dyn Transferable,
        amount: Decimal,
    ) -> bool {
        self.transfer(from, to, amount).is_ok()
    }
}

/// A pending transfer: source, destination and amount.
pub struct TransferRequest<'a> {
    pub from: &'a mut dyn Transferable,
    pub to: &'a mut dyn Transferable,
    pub amount: Decimal,
}

impl<'a> TransferRequest<'a> {
    pub fn new(
        from: &'a mut dyn Transferable,
        to: &'a mut dyn Transferable,
        amount: Decimal,
    ) -> Self {
        Self { from, to, amount }
    }

    /// Run the request through `service`
    pub fn execute<S: TransferService + ?Sized>(self, service: &S) -> AccountResult<TransferReceipt> {
        service.transfer(self.from, self.to, self.amount)
    }
}

/// Result of a completed transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub id: Uuid,
    pub amount: Decimal,
    /// Source balance after the transfer
    pub source_balance: Decimal,
    /// Destination balance after the transfer
    pub destination_balance: Decimal,
    pub completed_at: DateTime<Utc>,
}

impl TransferReceipt {
    pub fn new(amount: Decimal, source_balance: Decimal, destination_balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            source_balance,
            destination_balance,
            completed_at: Utc::now(),
        }
    }
}

/// Default transfer service with an inline compensating deposit.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferService;

impl BankTransferService {
    pub fn new() -> Self {
        Self
    }
}

impl TransferService for BankTransferService {
    fn transfer(
        &self,
        from: &mut dyn Transferable,
        to: &mut dyn Transferable,
        amount: Decimal,
    ) -> AccountResult<TransferReceipt> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount(amount));
        }
        if !from.can_withdraw(amount) {
            tracing::debug!(amount = %amount, "Transfer rejected by source pre-check");
            return Err(AccountError::TransferRejected { amount });
        }

        from.withdraw(amount)?;

        if let Err(err) = to.deposit(amount) {
            tracing::warn!(
                amount = %amount,
                error = %err,
                "Destination deposit failed, returning funds to source"
            );

            // Compensation
            if let Err(refund_err) = from.deposit(amount) {
                tracing::error!(
                    amount = %amount,
                    error = %refund_err,
                    "Compensating deposit failed"
                );
                return Err(AccountError::CompensationFailed {
                    amount,
                    reason: refund_err.to_string(),
                });
            }

            return Err(err);
        }

        Ok(TransferReceipt::new(amount, from.balance(), to.balance()))
    }
}
