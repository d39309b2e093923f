//! The vault: an append-only credits ledger with a running balance.
//!
//! Every credits movement in IxStats -- deposits, withdrawals, transfers,
//! purchases, rewards, and administrative adjustments -- produces one
//! [`VaultEntry`](ixstats_types::VaultEntry) appended to a country's
//! [`Vault`]. Entries are never modified or deleted; the running balance
//! is carried on each entry so statements render without replaying the
//! full history.
//!
//! # Modules
//!
//! - [`transaction`] -- [`VaultEntryBuilder`] with field validation.
//! - [`vault`] -- The per-country [`Vault`] with overdraw protection.

pub mod transaction;
pub mod vault;

pub use transaction::VaultEntryBuilder;
pub use vault::Vault;

use rust_decimal::Decimal;

/// Errors that can occur in the vault ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The amount is zero.
    #[error("amount must be non-zero")]
    ZeroAmount,

    /// The amount is negative where a magnitude was expected.
    #[error("amount must be positive, got {amount}")]
    NegativeAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A required builder field was not set.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A debit would overdraw the vault.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The requested debit magnitude.
        requested: Decimal,
        /// The balance available.
        available: Decimal,
    },

    /// Balance arithmetic left the representable range.
    #[error("balance arithmetic overflow")]
    Overflow,

    /// A restored ledger's running balances do not replay correctly.
    #[error("running balance mismatch at entry {index}")]
    BalanceMismatch {
        /// The index of the first inconsistent entry.
        index: usize,
    },

    /// An internal bookkeeping failure.
    #[error("internal ledger error: {0}")]
    InternalError(&'static str),
}
