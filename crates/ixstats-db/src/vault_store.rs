//! Vault ledger persistence for batch-inserting credits entries.
//!
//! Vault entries are flushed to `PostgreSQL` in batches using multi-row
//! UNNEST inserts: one statement per batch instead of one per entry.
//! Entries are append-only; there is no update path.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use ixstats_types::{CountryId, VaultEntry, VaultEntryId};

use crate::codec::{enum_from_db, enum_to_db};
use crate::error::DbError;

/// Default batch size for vault inserts.
const DEFAULT_BATCH_SIZE: usize = 100;

/// Raw database row for the `vault_entries` table.
#[derive(Debug, sqlx::FromRow)]
pub struct VaultRow {
    /// Entry UUID.
    pub id: Uuid,
    /// Owning country UUID.
    pub country_id: Uuid,
    /// Entry type variant name.
    pub entry_type: String,
    /// Movement magnitude.
    pub amount: Decimal,
    /// Signed balance effect.
    pub signed_delta: Decimal,
    /// Running balance after the entry.
    pub balance_after: Decimal,
    /// Human-readable reason.
    pub reason: String,
    /// Optional related-entity reference.
    pub reference_id: Option<Uuid>,
    /// Optional transfer counterparty.
    pub counterparty: Option<Uuid>,
    /// Real-time creation timestamp.
    pub created_at: DateTime<Utc>,
    /// In-game timestamp.
    pub ix_timestamp: DateTime<Utc>,
}

impl TryFrom<VaultRow> for VaultEntry {
    type Error = DbError;

    fn try_from(row: VaultRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: VaultEntryId::from(row.id),
            country_id: CountryId::from(row.country_id),
            entry_type: enum_from_db(&row.entry_type)?,
            amount: row.amount,
            signed_delta: row.signed_delta,
            balance_after: row.balance_after,
            reason: row.reason,
            reference_id: row.reference_id,
            counterparty: row.counterparty.map(CountryId::from),
            created_at: row.created_at,
            ix_timestamp: row.ix_timestamp,
        })
    }
}

/// Operations on the `vault_entries` table.
pub struct VaultStore<'a> {
    pool: &'a PgPool,
    batch_size: usize,
}

impl<'a> VaultStore<'a> {
    /// Create a new vault store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the batch size for inserts.
    #[must_use]
    pub const fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Batch-insert vault entries.
    ///
    /// Entries are inserted in batches using multi-row UNNEST for
    /// efficiency. Each batch is wrapped in a transaction for atomicity.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if an insert fails, or
    /// [`DbError::InvalidValue`] if an entry cannot be encoded.
    pub async fn batch_insert(&self, entries: &[VaultEntry]) -> Result<(), DbError> {
        if entries.is_empty() {
            return Ok(());
        }

        for chunk in entries.chunks(self.batch_size) {
            let mut tx = self.pool.begin().await?;

            let len = chunk.len();
            let mut ids = Vec::with_capacity(len);
            let mut country_ids = Vec::with_capacity(len);
            let mut entry_types = Vec::with_capacity(len);
            let mut amounts = Vec::with_capacity(len);
            let mut signed_deltas = Vec::with_capacity(len);
            let mut balances = Vec::with_capacity(len);
            let mut reasons = Vec::with_capacity(len);
            let mut reference_ids: Vec<Option<Uuid>> = Vec::with_capacity(len);
            let mut counterparties: Vec<Option<Uuid>> = Vec::with_capacity(len);
            let mut created_ats = Vec::with_capacity(len);
            let mut ix_timestamps = Vec::with_capacity(len);

            for entry in chunk {
                ids.push(entry.id.into_inner());
                country_ids.push(entry.country_id.into_inner());
                entry_types.push(enum_to_db(&entry.entry_type)?);
                amounts.push(entry.amount);
                signed_deltas.push(entry.signed_delta);
                balances.push(entry.balance_after);
                reasons.push(entry.reason.clone());
                reference_ids.push(entry.reference_id);
                counterparties.push(entry.counterparty.map(CountryId::into_inner));
                created_ats.push(entry.created_at);
                ix_timestamps.push(entry.ix_timestamp);
            }

            sqlx::query(
                r"INSERT INTO vault_entries (id, country_id, entry_type, amount, signed_delta, balance_after, reason, reference_id, counterparty, created_at, ix_timestamp)
                  SELECT * FROM UNNEST($1::UUID[], $2::UUID[], $3::TEXT[], $4::NUMERIC[], $5::NUMERIC[], $6::NUMERIC[], $7::TEXT[], $8::UUID[], $9::UUID[], $10::TIMESTAMPTZ[], $11::TIMESTAMPTZ[])",
            )
            .bind(&ids)
            .bind(&country_ids)
            .bind(&entry_types)
            .bind(&amounts)
            .bind(&signed_deltas)
            .bind(&balances)
            .bind(&reasons)
            .bind(&reference_ids)
            .bind(&counterparties)
            .bind(&created_ats)
            .bind(&ix_timestamps)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
        }

        tracing::debug!(count = entries.len(), "Inserted vault entries (batch UNNEST)");
        Ok(())
    }

    /// Query a country's full entry history in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored value cannot be decoded.
    pub async fn entries_for_country(
        &self,
        country_id: CountryId,
    ) -> Result<Vec<VaultEntry>, DbError> {
        let rows = sqlx::query_as::<_, VaultRow>(
            r"SELECT id, country_id, entry_type, amount, signed_delta, balance_after, reason, reference_id, counterparty, created_at, ix_timestamp
              FROM vault_entries
              WHERE country_id = $1
              ORDER BY created_at, id",
        )
        .bind(country_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(VaultEntry::try_from).collect()
    }

    /// The latest running balance for a country, or `None` if the vault
    /// has no entries.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn latest_balance(&self, country_id: CountryId) -> Result<Option<Decimal>, DbError> {
        let row: Option<(Decimal,)> = sqlx::query_as(
            r"SELECT balance_after FROM vault_entries
              WHERE country_id = $1
              ORDER BY created_at DESC, id DESC
              LIMIT 1",
        )
        .bind(country_id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|(balance,)| balance))
    }
}
