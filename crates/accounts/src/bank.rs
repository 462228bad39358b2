//! Bank orchestration
//!
//! Runs withdrawals and transfers and reports each outcome as text to a
//! [`NotificationSink`]. Failures are reported, then handed back to the
//! caller as data.

use crate::account::{Transferable, Withdraw};
use crate::error::AccountResult;
use crate::transfer::{BankTransferService, TransferReceipt, TransferRequest, TransferService};
use rust_decimal::Decimal;

/// Where the bank reports what happened
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// Sink that emits each message as a `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, message: &str) {
        tracing::info!(target: "solidkit::bank", "{}", message);
    }
}

/// Bank front desk
pub struct Bank<S = BankTransferService, N = TracingSink> {
    transfers: S,
    sink: N,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    /// Bank with the default transfer service, reporting via tracing
    pub fn new() -> Self {
        Self::with_parts(BankTransferService, TracingSink)
    }
}

impl<S: TransferService, N: NotificationSink> Bank<S, N> {
    pub fn with_parts(transfers: S, sink: N) -> Self {
        Self { transfers, sink }
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Withdraw and report
    pub fn process_withdrawal(&self, account: &mut dyn Withdraw, amount: Decimal) -> AccountResult<()> {
        let result = account.withdraw(amount);
        match &result {
            Ok(()) => self.sink.notify(&format!("Successfully withdrew {}", amount)),
            Err(e) => self.sink.notify(&format!("Withdrawal failed: {}", e)),
        }
        result
    }

    /// Transfer and report
    pub fn transfer(
        &self,
        from: &mut dyn Transferable,
        to: &mut dyn Transferable,
        amount: Decimal,
    ) -> AccountResult<TransferReceipt> {
        let result = TransferRequest::new(from, to, amount).execute(&self.transfers);
        match &result {
            Ok(receipt) => self.sink.notify(&format!(
                "Successfully transferred {} from account to account (receipt {})",
                amount, receipt.id
            )),
            Err(e) => self.sink.notify(&format!("Transfer failed: {}", e)),
        }
        result
    }

    /// Transfer and report, outcome as a flag
    pub fn try_transfer(
        &self,
        from: &mut dyn Transferable,
        to: &mut dyn Transferable,
        amount: Decimal,
    ) -> bool {
        let success = self.transfers.try_transfer(from, to, amount);
        if success {
            self.sink
                .notify(&format!("Successfully transferred {} from account to account", amount));
        } else {
            self.sink.notify("Transfer failed");
        }
        success
    }
}
