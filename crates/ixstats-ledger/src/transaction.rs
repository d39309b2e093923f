//! Entry builder and validation for the vault ledger.
//!
//! Provides a [`VaultEntryBuilder`] that enforces the ledger invariants:
//! every entry has a strictly positive magnitude, a signed delta matching
//! its direction, and a running balance that never goes negative.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use ixstats_types::{CountryId, VaultEntry, VaultEntryId, VaultEntryType};

use crate::LedgerError;

/// Builder for constructing validated [`VaultEntry`] values.
///
/// The builder is applied *against* a prior balance: `build_against`
/// computes the signed delta from the entry type (or an explicit debit
/// flag for adjustments) and derives the new running balance, rejecting
/// any debit that would overdraw.
///
/// # Examples
///
/// ```
/// use ixstats_ledger::VaultEntryBuilder;
/// use ixstats_types::{CountryId, VaultEntryType};
/// use rust_decimal::Decimal;
/// use chrono::Utc;
///
/// let entry = VaultEntryBuilder::new(CountryId::new(), VaultEntryType::Deposit)
///     .amount(Decimal::new(500, 0))
///     .reason("WEEKLY_STIPEND".to_owned())
///     .ix_timestamp(Utc::now())
///     .build_against(Decimal::ZERO);
///
/// assert!(entry.is_ok());
/// ```
#[derive(Debug)]
pub struct VaultEntryBuilder {
    country_id: CountryId,
    entry_type: VaultEntryType,
    amount: Option<Decimal>,
    debit: Option<bool>,
    reason: Option<String>,
    reference_id: Option<Uuid>,
    counterparty: Option<CountryId>,
    ix_timestamp: Option<DateTime<Utc>>,
}

impl VaultEntryBuilder {
    /// Start building an entry for the given vault and entry type.
    pub const fn new(country_id: CountryId, entry_type: VaultEntryType) -> Self {
        Self {
            country_id,
            entry_type,
            amount: None,
            debit: None,
            reason: None,
            reference_id: None,
            counterparty: None,
            ix_timestamp: None,
        }
    }

    /// Set the magnitude of the movement. Must be strictly positive.
    #[must_use]
    pub const fn amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Override the direction. By default the direction follows the
    /// entry type; adjustments must set it explicitly.
    #[must_use]
    pub const fn debit(mut self, debit: bool) -> Self {
        self.debit = Some(debit);
        self
    }

    /// Set the human-readable reason.
    #[must_use]
    pub fn reason(mut self, reason: String) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Set an optional reference ID linking to a related entity.
    #[must_use]
    pub const fn reference_id(mut self, id: Uuid) -> Self {
        self.reference_id = Some(id);
        self
    }

    /// Set the other vault involved in a transfer.
    #[must_use]
    pub const fn counterparty(mut self, country: CountryId) -> Self {
        self.counterparty = Some(country);
        self
    }

    /// Set the in-game instant of the entry.
    #[must_use]
    pub const fn ix_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.ix_timestamp = Some(at);
        self
    }

    /// Validate inputs against the prior balance and produce an entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ZeroAmount`] or
    /// [`LedgerError::NegativeAmount`] for invalid magnitudes,
    /// [`LedgerError::MissingField`] for unset required fields,
    /// [`LedgerError::InsufficientFunds`] if a debit overdraws, and
    /// [`LedgerError::Overflow`] on balance overflow.
    pub fn build_against(self, balance: Decimal) -> Result<VaultEntry, LedgerError> {
        let amount = self.amount.ok_or(LedgerError::MissingField("amount"))?;
        let reason = self.reason.ok_or(LedgerError::MissingField("reason"))?;
        let ix_timestamp = self
            .ix_timestamp
            .ok_or(LedgerError::MissingField("ix_timestamp"))?;

        if amount.is_zero() {
            return Err(LedgerError::ZeroAmount);
        }
        if amount.is_sign_negative() {
            return Err(LedgerError::NegativeAmount { amount });
        }

        let debit = self
            .debit
            .unwrap_or_else(|| !self.entry_type.is_credit());

        let signed_delta = if debit { -amount } else { amount };
        let balance_after = balance
            .checked_add(signed_delta)
            .ok_or(LedgerError::Overflow)?;

        if balance_after.is_sign_negative() {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: balance,
            });
        }

        Ok(VaultEntry {
            id: VaultEntryId::new(),
            country_id: self.country_id,
            entry_type: self.entry_type,
            amount,
            signed_delta,
            balance_after,
            reason,
            reference_id: self.reference_id,
            counterparty: self.counterparty,
            created_at: Utc::now(),
            ix_timestamp,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn builder(entry_type: VaultEntryType) -> VaultEntryBuilder {
        VaultEntryBuilder::new(CountryId::new(), entry_type)
            .amount(Decimal::new(100, 0))
            .reason(String::from("TEST"))
            .ix_timestamp(Utc::now())
    }

    #[test]
    fn deposit_credits_the_balance() {
        let entry = builder(VaultEntryType::Deposit)
            .build_against(Decimal::new(50, 0))
            .unwrap();
        assert_eq!(entry.signed_delta, Decimal::new(100, 0));
        assert_eq!(entry.balance_after, Decimal::new(150, 0));
    }

    #[test]
    fn withdrawal_debits_the_balance() {
        let entry = builder(VaultEntryType::Withdrawal)
            .build_against(Decimal::new(150, 0))
            .unwrap();
        assert_eq!(entry.signed_delta, Decimal::new(-100, 0));
        assert_eq!(entry.balance_after, Decimal::new(50, 0));
    }

    #[test]
    fn overdraw_is_rejected() {
        let result = builder(VaultEntryType::Withdrawal).build_against(Decimal::new(99, 0));
        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
    }

    #[test]
    fn exact_balance_withdrawal_reaches_zero() {
        let entry = builder(VaultEntryType::Withdrawal)
            .build_against(Decimal::new(100, 0))
            .unwrap();
        assert_eq!(entry.balance_after, Decimal::ZERO);
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        let zero = VaultEntryBuilder::new(CountryId::new(), VaultEntryType::Deposit)
            .amount(Decimal::ZERO)
            .reason(String::from("TEST"))
            .ix_timestamp(Utc::now())
            .build_against(Decimal::ZERO);
        assert!(matches!(zero, Err(LedgerError::ZeroAmount)));

        let negative = VaultEntryBuilder::new(CountryId::new(), VaultEntryType::Deposit)
            .amount(Decimal::new(-5, 0))
            .reason(String::from("TEST"))
            .ix_timestamp(Utc::now())
            .build_against(Decimal::ZERO);
        assert!(matches!(negative, Err(LedgerError::NegativeAmount { .. })));
    }

    #[test]
    fn missing_fields_are_named() {
        let result = VaultEntryBuilder::new(CountryId::new(), VaultEntryType::Deposit)
            .amount(Decimal::new(10, 0))
            .ix_timestamp(Utc::now())
            .build_against(Decimal::ZERO);
        assert!(matches!(result, Err(LedgerError::MissingField("reason"))));
    }

    #[test]
    fn adjustment_direction_is_explicit() {
        let credit = builder(VaultEntryType::Adjustment)
            .debit(false)
            .build_against(Decimal::ZERO)
            .unwrap();
        assert_eq!(credit.signed_delta, Decimal::new(100, 0));

        let debit = builder(VaultEntryType::Adjustment)
            .debit(true)
            .build_against(Decimal::new(100, 0))
            .unwrap();
        assert_eq!(debit.signed_delta, Decimal::new(-100, 0));
    }
}
