//! The per-country vault: recording methods and balance queries.
//!
//! # Design
//!
//! - **Append-only**: entries are never modified or deleted.
//! - **Running balance**: each entry carries `balance_after`; the vault's
//!   balance is the last entry's running balance.
//! - **No overdrafts**: debits that would take the balance negative are
//!   rejected before anything is appended.
//! - **Precision**: all quantities use [`Decimal`] -- no floating point.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use ixstats_types::{CountryId, VaultEntry, VaultEntryType};

use crate::{LedgerError, VaultEntryBuilder};

/// A single country's credits vault.
#[derive(Debug)]
pub struct Vault {
    /// The country that owns this vault.
    country_id: CountryId,
    /// All entries, in insertion order.
    entries: Vec<VaultEntry>,
}

impl Vault {
    /// Create a new empty vault for a country.
    pub const fn new(country_id: CountryId) -> Self {
        Self {
            country_id,
            entries: Vec::new(),
        }
    }

    /// Restore a vault from persisted entries, verifying that the
    /// running balances replay correctly.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BalanceMismatch`] naming the first entry
    /// whose `balance_after` does not follow from the prior balance.
    pub fn from_entries(
        country_id: CountryId,
        entries: Vec<VaultEntry>,
    ) -> Result<Self, LedgerError> {
        let mut balance = Decimal::ZERO;
        for (index, entry) in entries.iter().enumerate() {
            let expected = balance
                .checked_add(entry.signed_delta)
                .ok_or(LedgerError::Overflow)?;
            if expected != entry.balance_after || expected.is_sign_negative() {
                return Err(LedgerError::BalanceMismatch { index });
            }
            balance = expected;
        }
        Ok(Self {
            country_id,
            entries,
        })
    }

    /// The country that owns this vault.
    pub const fn country_id(&self) -> CountryId {
        self.country_id
    }

    /// The current balance: the last entry's running balance.
    pub fn balance(&self) -> Decimal {
        self.entries
            .last()
            .map_or(Decimal::ZERO, |e| e.balance_after)
    }

    /// The number of entries in the vault.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vault has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    /// Entries created within the given real-time range (inclusive start,
    /// exclusive end), in insertion order.
    pub fn statement(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&VaultEntry> {
        self.entries
            .iter()
            .filter(|e| e.created_at >= from && e.created_at < to)
            .collect()
    }

    /// Record a deposit.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the entry fails validation.
    pub fn deposit(
        &mut self,
        amount: Decimal,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Deposit)
                .amount(amount)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record a withdrawal.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the withdrawal would
    /// overdraw, or another [`LedgerError`] on validation failure.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Withdrawal)
                .amount(amount)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record a purchase against a catalog item.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the purchase would
    /// overdraw, or another [`LedgerError`] on validation failure.
    pub fn purchase(
        &mut self,
        amount: Decimal,
        reason: String,
        reference_id: Uuid,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Purchase)
                .amount(amount)
                .reason(reason)
                .reference_id(reference_id)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record a simulation reward.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the entry fails validation.
    pub fn reward(
        &mut self,
        amount: Decimal,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Reward)
                .amount(amount)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record the outbound half of a transfer to another vault.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the transfer would
    /// overdraw, or another [`LedgerError`] on validation failure.
    pub fn transfer_out(
        &mut self,
        amount: Decimal,
        counterparty: CountryId,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Transfer)
                .amount(amount)
                .debit(true)
                .counterparty(counterparty)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record the inbound half of a transfer from another vault.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError`] if the entry fails validation.
    pub fn transfer_in(
        &mut self,
        amount: Decimal,
        counterparty: CountryId,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Transfer)
                .amount(amount)
                .debit(false)
                .counterparty(counterparty)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Record an administrative adjustment. The sign of `signed_amount`
    /// determines the direction; the magnitude is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if a negative
    /// adjustment would overdraw, or another [`LedgerError`] on
    /// validation failure.
    pub fn adjust(
        &mut self,
        signed_amount: Decimal,
        reason: String,
        ix_timestamp: DateTime<Utc>,
    ) -> Result<&VaultEntry, LedgerError> {
        if signed_amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        let debit = signed_amount.is_sign_negative();
        self.append(
            VaultEntryBuilder::new(self.country_id, VaultEntryType::Adjustment)
                .amount(signed_amount.abs())
                .debit(debit)
                .reason(reason)
                .ix_timestamp(ix_timestamp),
        )
    }

    /// Build an entry against the current balance and append it.
    fn append(&mut self, builder: VaultEntryBuilder) -> Result<&VaultEntry, LedgerError> {
        let entry = builder.build_against(self.balance())?;
        tracing::debug!(
            country = %self.country_id,
            entry_type = ?entry.entry_type,
            amount = %entry.amount,
            balance_after = %entry.balance_after,
            "Vault entry recorded"
        );
        self.entries.push(entry);
        self.entries.last().ok_or(LedgerError::InternalError(
            "failed to retrieve entry after append",
        ))
    }
}
