//! Country record persistence.
//!
//! Countries are upserted by ID: creating and renaming a country are the
//! same statement. Tier columns are stored as TEXT variant names so the
//! database rows read the same as the dashboard payloads.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use ixstats_types::{Country, CountryId};

use crate::codec::{enum_from_db, enum_to_db};
use crate::error::DbError;

/// Raw database row for the `countries` table.
#[derive(Debug, sqlx::FromRow)]
pub struct CountryRow {
    /// Country UUID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Total population (stored signed; always non-negative).
    pub population: i64,
    /// Nominal GDP.
    pub gdp: f64,
    /// GDP per capita.
    pub gdp_per_capita: f64,
    /// Annual growth rate fraction.
    pub growth_rate: f64,
    /// Economic tier variant name.
    pub economic_tier: String,
    /// Population tier variant name.
    pub population_tier: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<CountryRow> for Country {
    type Error = DbError;

    fn try_from(row: CountryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CountryId::from(row.id),
            name: row.name,
            slug: row.slug,
            population: u64::try_from(row.population)
                .map_err(|_e| DbError::InvalidValue(format!("negative population {}", row.population)))?,
            gdp: row.gdp,
            gdp_per_capita: row.gdp_per_capita,
            growth_rate: row.growth_rate,
            economic_tier: enum_from_db(&row.economic_tier)?,
            population_tier: enum_from_db(&row.population_tier)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Operations on the `countries` table.
pub struct CountryStore<'a> {
    pool: &'a PgPool,
}

impl<'a> CountryStore<'a> {
    /// Create a new country store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert or update a country record by ID.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the statement fails, or
    /// [`DbError::InvalidValue`] if a field cannot be encoded.
    pub async fn upsert(&self, country: &Country) -> Result<(), DbError> {
        let population = i64::try_from(country.population).unwrap_or(i64::MAX);
        sqlx::query(
            r"INSERT INTO countries (id, name, slug, population, gdp, gdp_per_capita, growth_rate, economic_tier, population_tier, created_at, updated_at)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
              ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                slug = EXCLUDED.slug,
                population = EXCLUDED.population,
                gdp = EXCLUDED.gdp,
                gdp_per_capita = EXCLUDED.gdp_per_capita,
                growth_rate = EXCLUDED.growth_rate,
                economic_tier = EXCLUDED.economic_tier,
                population_tier = EXCLUDED.population_tier,
                updated_at = EXCLUDED.updated_at",
        )
        .bind(country.id.into_inner())
        .bind(&country.name)
        .bind(&country.slug)
        .bind(population)
        .bind(country.gdp)
        .bind(country.gdp_per_capita)
        .bind(country.growth_rate)
        .bind(enum_to_db(&country.economic_tier)?)
        .bind(enum_to_db(&country.population_tier)?)
        .bind(country.created_at)
        .bind(country.updated_at)
        .execute(self.pool)
        .await?;

        tracing::debug!(country = %country.id, "Country upserted");
        Ok(())
    }

    /// Fetch a country by ID. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored value cannot be decoded.
    pub async fn get(&self, id: CountryId) -> Result<Option<Country>, DbError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r"SELECT id, name, slug, population, gdp, gdp_per_capita, growth_rate, economic_tier, population_tier, created_at, updated_at
              FROM countries WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool)
        .await?;

        row.map(Country::try_from).transpose()
    }

    /// Fetch a country by slug. Returns `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored value cannot be decoded.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Country>, DbError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r"SELECT id, name, slug, population, gdp, gdp_per_capita, growth_rate, economic_tier, population_tier, created_at, updated_at
              FROM countries WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        row.map(Country::try_from).transpose()
    }

    /// List all countries ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, or
    /// [`DbError::InvalidValue`] if a stored value cannot be decoded.
    pub async fn list(&self) -> Result<Vec<Country>, DbError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            r"SELECT id, name, slug, population, gdp, gdp_per_capita, growth_rate, economic_tier, population_tier, created_at, updated_at
              FROM countries ORDER BY name",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Country::try_from).collect()
    }

    /// Delete a country. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the statement fails.
    pub async fn delete(&self, id: CountryId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM countries WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
