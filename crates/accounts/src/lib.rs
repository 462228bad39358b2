//! # Solidkit Accounts
//!
//! Account model with per-variant withdrawal rules:
//! - `Account` / `AccountKind`: Savings, Checking, FixedDeposit
//! - `Withdraw`, `Deposit`, `Transferable`: capability traits
//! - `TransferService`: transfers with a compensating deposit
//! - `Bank`: reports outcomes to a `NotificationSink`

pub mod account;
pub mod bank;
pub mod config;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountKind, Deposit, Transferable, Withdraw};
pub use bank::{Bank, NotificationSink, TracingSink};
pub use config::AccountPolicy;
pub use error::{AccountError, AccountResult, WithdrawalPolicy};
pub use transfer::{BankTransferService, TransferReceipt, TransferRequest, TransferService};
