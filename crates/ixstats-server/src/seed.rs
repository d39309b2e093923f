//! Demonstration seed data.
//!
//! When no database is attached (or seeding is enabled on a fresh one)
//! the server starts with a small set of recognizable countries so the
//! dashboard has something to render immediately.

use chrono::Utc;
use rust_decimal::Decimal;

use ixstats_core::{AtomicStateManager, IxTimeError, StateError};
use ixstats_engine::economy;
use ixstats_ledger::{LedgerError, Vault};
use ixstats_types::{ComponentType, Country, CountryId};

use crate::state::{CountryEntry, DashboardState};

/// Opening vault balance granted to every seeded country.
const SEED_CREDITS: i64 = 10_000;

/// Base annual growth rate assigned to seeded countries before tier caps.
const SEED_BASE_GROWTH: f64 = 0.03;

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A component selection was rejected.
    #[error("seed selection error: {0}")]
    Selection(#[from] StateError),

    /// A vault entry was rejected.
    #[error("seed vault error: {0}")]
    Vault(#[from] LedgerError),

    /// The clock rejected a conversion.
    #[error("seed time error: {0}")]
    Time(#[from] IxTimeError),
}

/// One seed country specification.
struct SeedSpec {
    name: &'static str,
    slug: &'static str,
    population: u64,
    gdp_per_capita: f64,
    components: &'static [ComponentType],
}

/// The demonstration roster.
const SEED_ROSTER: [SeedSpec; 3] = [
    SeedSpec {
        name: "Urcea",
        slug: "urcea",
        population: 95_000_000,
        gdp_per_capita: 48_000.0,
        components: &[
            ComponentType::FederalSystem,
            ComponentType::DemocraticProcess,
            ComponentType::ElectoralLegitimacy,
            ComponentType::ProfessionalBureaucracy,
            ComponentType::IndependentJudiciary,
            ComponentType::RuleOfLaw,
        ],
    },
    SeedSpec {
        name: "Caphiria",
        slug: "caphiria",
        population: 180_000_000,
        gdp_per_capita: 58_000.0,
        components: &[
            ComponentType::CentralizedPower,
            ComponentType::AutocraticProcess,
            ComponentType::TraditionalLegitimacy,
            ComponentType::ProfessionalBureaucracy,
            ComponentType::MilitaryAdministration,
            ComponentType::MilitaryEnforcement,
        ],
    },
    SeedSpec {
        name: "Burgundie",
        slug: "burgundie",
        population: 22_000_000,
        gdp_per_capita: 72_000.0,
        components: &[
            ComponentType::UnitarySystem,
            ComponentType::TechnocraticProcess,
            ComponentType::PerformanceLegitimacy,
            ComponentType::TechnocraticAgencies,
            ComponentType::EconomicIncentives,
        ],
    },
];

/// Seed the demonstration countries into the dashboard.
///
/// Each country gets its component selection applied through the state
/// manager (so derived state is consistent from the first request) and
/// an opening vault deposit stamped with the current ix time.
///
/// # Errors
///
/// Returns [`SeedError`] if a selection, vault entry, or time
/// conversion is rejected; seed data is static, so this indicates a
/// table regression rather than bad input.
pub fn seed_demo_countries(dashboard: &mut DashboardState) -> Result<Vec<CountryId>, SeedError> {
    let now = Utc::now();
    let ix_now = dashboard.clock.ix_time(now)?;
    let mut seeded = Vec::with_capacity(SEED_ROSTER.len());

    for spec in &SEED_ROSTER {
        let id = CountryId::new();
        // Population fits f64's integer range comfortably at these scales.
        #[allow(clippy::cast_precision_loss)]
        let gdp = spec.gdp_per_capita * spec.population as f64;
        let economic_tier = economy::tier_for_gdp_per_capita(spec.gdp_per_capita);

        let country = Country {
            id,
            name: String::from(spec.name),
            slug: String::from(spec.slug),
            population: spec.population,
            gdp,
            gdp_per_capita: spec.gdp_per_capita,
            growth_rate: economy::capped_growth(SEED_BASE_GROWTH, economic_tier),
            economic_tier,
            population_tier: economy::tier_for_population(spec.population),
            created_at: now,
            updated_at: now,
        };

        let mut manager = AtomicStateManager::new(id, gdp, economic_tier);
        manager.set_components(spec.components.iter().copied().collect())?;

        let mut vault = Vault::new(id);
        vault.deposit(
            Decimal::new(SEED_CREDITS, 0),
            String::from("INITIAL_ALLOCATION"),
            ix_now,
        )?;

        dashboard.insert_country(CountryEntry {
            country,
            manager,
            vault,
        });
        seeded.push(id);
    }

    tracing::info!(count = seeded.len(), "Demo countries seeded");
    Ok(seeded)
}
