//! Component selection persistence.
//!
//! A country's selection is a set of component variant names. Replacing
//! the selection is transactional: the delete and re-insert either both
//! land or neither does, so a reader never observes a half-replaced
//! government.

use std::collections::BTreeSet;

use sqlx::PgPool;

use ixstats_types::{ComponentType, CountryId};

use crate::codec::{enum_from_db, enum_to_db};
use crate::error::DbError;

/// Operations on the `component_selections` table.
pub struct SelectionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> SelectionStore<'a> {
    /// Create a new selection store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace a country's entire selection transactionally.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if any statement fails; the
    /// transaction is rolled back in that case.
    pub async fn replace(
        &self,
        country_id: CountryId,
        selection: &BTreeSet<ComponentType>,
    ) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM component_selections WHERE country_id = $1")
            .bind(country_id.into_inner())
            .execute(&mut *tx)
            .await?;

        if !selection.is_empty() {
            let components: Vec<String> = selection
                .iter()
                .map(enum_to_db)
                .collect::<Result<_, _>>()?;

            sqlx::query(
                r"INSERT INTO component_selections (country_id, component)
                  SELECT $1, * FROM UNNEST($2::TEXT[])",
            )
            .bind(country_id.into_inner())
            .bind(&components)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            country = %country_id,
            count = selection.len(),
            "Component selection replaced"
        );
        Ok(())
    }

    /// Fetch a country's selection as a set.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored name is not a known
    /// component.
    pub async fn fetch(&self, country_id: CountryId) -> Result<BTreeSet<ComponentType>, DbError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT component FROM component_selections WHERE country_id = $1",
        )
        .bind(country_id.into_inner())
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|(name,)| enum_from_db(name))
            .collect()
    }
}
