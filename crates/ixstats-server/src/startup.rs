//! Binary startup sequence: configuration, stores, and state hydration.
//!
//! Builds the shared [`AppState`] from an [`AppConfig`]:
//!
//! 1. Create the IxTime clock from the configured multiplier.
//! 2. Connect to `PostgreSQL` when configured, run migrations, and
//!    hydrate countries, selections, vaults, and notifications.
//! 3. Connect to Redis when configured; a failed connection degrades to
//!    running without a cache rather than aborting startup.
//! 4. Seed demonstration countries when the roster is empty and seeding
//!    is enabled.

use std::sync::Arc;

use tracing::{info, warn};

use ixstats_core::{AppConfig, AtomicStateManager, IxClock, IxTimeError, StateError};
use ixstats_db::{
    CachePool, CountryStore, DbError, NotificationStore, PostgresPool, SelectionStore, VaultStore,
};
use ixstats_ledger::{LedgerError, Vault};

use crate::seed::{seed_demo_countries, SeedError};
use crate::state::{AppState, CountryEntry};

/// Errors that can occur during startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The IxTime clock rejected the configured multiplier.
    #[error("clock error: {0}")]
    Time(#[from] IxTimeError),

    /// A database operation failed during hydration.
    #[error("database error: {0}")]
    Db(#[from] DbError),

    /// A persisted vault did not replay cleanly.
    #[error("vault hydration error: {0}")]
    Ledger(#[from] LedgerError),

    /// A persisted selection was rejected by the state manager.
    #[error("selection hydration error: {0}")]
    State(#[from] StateError),

    /// Seeding the demonstration roster failed.
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),
}

/// Build the shared application state from configuration.
///
/// # Errors
///
/// Returns [`StartupError`] if the clock configuration is invalid, the
/// configured database is unreachable, or persisted state fails to
/// hydrate. An unreachable Redis is downgraded to a warning.
pub async fn build_state(config: &AppConfig) -> Result<Arc<AppState>, StartupError> {
    // 1. IxTime clock.
    let clock = IxClock::new(config.time.base_multiplier)?;
    let mut state = AppState::with_clock(clock);

    // 2. PostgreSQL (optional).
    if let Some(url) = &config.infrastructure.database_url {
        let pool = PostgresPool::connect_url(url).await?;
        pool.run_migrations().await?;
        hydrate_from_db(&state, &pool).await?;
        state = state.with_db(pool);
    }

    // 3. Redis (optional, degrades to no cache).
    if let Some(url) = &config.infrastructure.redis_url {
        match CachePool::connect(url).await {
            Ok(cache) => state = state.with_cache(cache),
            Err(e) => warn!(error = %e, "Redis unavailable, continuing without cache"),
        }
    }

    // 4. Demo seed when the roster is empty.
    let seeded = {
        let mut dashboard = state.dashboard.write().await;
        if dashboard.countries.is_empty() && config.world.seed_demo_countries {
            seed_demo_countries(&mut dashboard)?
        } else {
            Vec::new()
        }
    };

    // Persist freshly seeded countries so restarts hydrate them back.
    if !seeded.is_empty() {
        if let Some(db) = state.db.clone() {
            persist_seeded(&state, &db, &seeded).await;
        }
    }

    Ok(Arc::new(state))
}

/// Load persisted countries, selections, vaults, and notifications into
/// the in-memory dashboard.
async fn hydrate_from_db(state: &AppState, pool: &PostgresPool) -> Result<(), StartupError> {
    let countries = CountryStore::new(pool.pool()).list().await?;
    let selections = SelectionStore::new(pool.pool());
    let vaults = VaultStore::new(pool.pool());

    let mut dashboard = state.dashboard.write().await;

    for country in countries {
        let selection = selections.fetch(country.id).await?;
        let entries = vaults.entries_for_country(country.id).await?;

        let mut manager =
            AtomicStateManager::new(country.id, country.gdp, country.economic_tier);
        manager.set_components(selection)?;
        let vault = Vault::from_entries(country.id, entries)?;

        dashboard.insert_country(CountryEntry {
            country,
            manager,
            vault,
        });
    }

    dashboard.notifications = NotificationStore::new(pool.pool()).list(false, None).await?;

    info!(
        countries = dashboard.countries.len(),
        notifications = dashboard.notifications.len(),
        "State hydrated from PostgreSQL"
    );
    Ok(())
}

/// Best-effort persistence of freshly seeded countries.
async fn persist_seeded(
    state: &AppState,
    db: &PostgresPool,
    seeded: &[ixstats_types::CountryId],
) {
    let dashboard = state.dashboard.read().await;
    let countries = CountryStore::new(db.pool());
    let selections = SelectionStore::new(db.pool());
    let vaults = VaultStore::new(db.pool());

    for entry in dashboard
        .countries
        .values()
        .filter(|e| seeded.contains(&e.country.id))
    {
        if let Err(e) = countries.upsert(&entry.country).await {
            warn!(error = %e, country = %entry.country.id, "Seed country persist failed");
            continue;
        }
        if let Err(e) = selections
            .replace(entry.country.id, entry.manager.selection())
            .await
        {
            warn!(error = %e, country = %entry.country.id, "Seed selection persist failed");
        }
        if let Err(e) = vaults.batch_insert(entry.vault.entries()).await {
            warn!(error = %e, country = %entry.country.id, "Seed vault persist failed");
        }
    }
}
