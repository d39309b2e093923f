//! Economic tier derivation and tier-capped growth.
//!
//! Tiers are computed from the record's GDP per capita -- never stored
//! independently. The tier caps annual growth so mature economies cannot
//! compound at frontier rates, and the global growth factor applies a
//! world-economy drift to every country equally.

use ixstats_types::{EconomicTier, PopulationTier};

/// The world-economy drift multiplier applied to every base growth rate.
pub const GLOBAL_GROWTH_FACTOR: f64 = 1.0321;

// ---------------------------------------------------------------------------
// Tier derivation
// ---------------------------------------------------------------------------

/// Derive the economic tier from GDP per capita.
///
/// Band edges are inclusive on the lower side: a GDP per capita of
/// exactly 45,000 is `Strong`, and 50,000 is still `Strong`.
pub const fn tier_for_gdp_per_capita(gdp_per_capita: f64) -> EconomicTier {
    if gdp_per_capita < 10_000.0 {
        EconomicTier::Impoverished
    } else if gdp_per_capita < 25_000.0 {
        EconomicTier::Developing
    } else if gdp_per_capita < 35_000.0 {
        EconomicTier::Developed
    } else if gdp_per_capita < 45_000.0 {
        EconomicTier::Healthy
    } else if gdp_per_capita < 65_000.0 {
        EconomicTier::Strong
    } else if gdp_per_capita < 100_000.0 {
        EconomicTier::VeryStrong
    } else {
        EconomicTier::Extravagant
    }
}

/// Derive the population tier from total population.
pub const fn tier_for_population(population: u64) -> PopulationTier {
    if population < 1_000_000 {
        PopulationTier::Tier1
    } else if population < 10_000_000 {
        PopulationTier::Tier2
    } else if population < 30_000_000 {
        PopulationTier::Tier3
    } else if population < 60_000_000 {
        PopulationTier::Tier4
    } else if population < 120_000_000 {
        PopulationTier::Tier5
    } else if population < 350_000_000 {
        PopulationTier::Tier6
    } else {
        PopulationTier::Tier7
    }
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Maximum annual growth rate for an economic tier, as a fraction.
pub const fn max_growth_rate(tier: EconomicTier) -> f64 {
    match tier {
        EconomicTier::Impoverished => 0.10,
        EconomicTier::Developing => 0.075,
        EconomicTier::Developed => 0.05,
        EconomicTier::Healthy => 0.035,
        EconomicTier::Strong => 0.0275,
        EconomicTier::VeryStrong => 0.015,
        EconomicTier::Extravagant => 0.005,
    }
}

/// Stability-formula mapping of a tier to a 0-100 economic score.
pub const fn tier_score(tier: EconomicTier) -> f64 {
    match tier {
        EconomicTier::Impoverished => 30.0,
        EconomicTier::Developing => 42.0,
        EconomicTier::Developed => 55.0,
        EconomicTier::Healthy => 65.0,
        EconomicTier::Strong => 75.0,
        EconomicTier::VeryStrong => 85.0,
        EconomicTier::Extravagant => 95.0,
    }
}

/// Apply the global factor to a base growth rate and cap it by tier.
///
/// Negative base rates pass through uncapped: contractions are not
/// limited by the ceiling on expansion.
pub fn capped_growth(base_rate: f64, tier: EconomicTier) -> f64 {
    let adjusted = base_rate * GLOBAL_GROWTH_FACTOR;
    if adjusted < 0.0 {
        adjusted
    } else {
        adjusted.min(max_growth_rate(tier))
    }
}

/// Compound a nominal GDP forward over a (possibly fractional) number of
/// in-game years at the given annual rate.
pub fn project_gdp(gdp: f64, annual_rate: f64, years: f64) -> f64 {
    if !gdp.is_finite() || gdp <= 0.0 || !years.is_finite() || years < 0.0 {
        return 0.0;
    }
    gdp * (1.0 + annual_rate).powf(years)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(tier_for_gdp_per_capita(0.0), EconomicTier::Impoverished);
        assert_eq!(tier_for_gdp_per_capita(9_999.0), EconomicTier::Impoverished);
        assert_eq!(tier_for_gdp_per_capita(10_000.0), EconomicTier::Developing);
        assert_eq!(tier_for_gdp_per_capita(25_000.0), EconomicTier::Developed);
        assert_eq!(tier_for_gdp_per_capita(35_000.0), EconomicTier::Healthy);
        assert_eq!(tier_for_gdp_per_capita(45_000.0), EconomicTier::Strong);
        assert_eq!(tier_for_gdp_per_capita(65_000.0), EconomicTier::VeryStrong);
        assert_eq!(tier_for_gdp_per_capita(100_000.0), EconomicTier::Extravagant);
    }

    #[test]
    fn fifty_thousand_is_strong() {
        assert_eq!(tier_for_gdp_per_capita(50_000.0), EconomicTier::Strong);
    }

    #[test]
    fn population_tiers() {
        assert_eq!(tier_for_population(500_000), PopulationTier::Tier1);
        assert_eq!(tier_for_population(1_000_000), PopulationTier::Tier2);
        assert_eq!(tier_for_population(45_000_000), PopulationTier::Tier4);
        assert_eq!(tier_for_population(400_000_000), PopulationTier::Tier7);
    }

    #[test]
    fn growth_caps_bind_mature_economies() {
        // 6% base growth on an Extravagant economy caps at 0.5%.
        let rate = capped_growth(0.06, EconomicTier::Extravagant);
        assert_eq!(rate, 0.005);

        // The same base growth on an Impoverished economy passes through
        // with the global factor applied.
        let rate = capped_growth(0.06, EconomicTier::Impoverished);
        assert!((rate - 0.06 * GLOBAL_GROWTH_FACTOR).abs() < 1e-12);
    }

    #[test]
    fn contractions_are_never_capped() {
        let rate = capped_growth(-0.04, EconomicTier::Extravagant);
        assert!(rate < -0.04);
    }

    #[test]
    fn projection_compounds() {
        let projected = project_gdp(1.0e12, 0.03, 2.0);
        assert!((projected - 1.0e12 * 1.03 * 1.03).abs() < 1.0);
    }

    #[test]
    fn projection_handles_fractional_years() {
        let one_year = project_gdp(1.0e12, 0.04, 1.0);
        let two_halves = project_gdp(project_gdp(1.0e12, 0.04, 0.5), 0.04, 0.5);
        assert!((one_year - two_halves).abs() < 1.0);
    }

    #[test]
    fn projection_rejects_degenerate_inputs() {
        assert_eq!(project_gdp(f64::NAN, 0.03, 1.0), 0.0);
        assert_eq!(project_gdp(-5.0, 0.03, 1.0), 0.0);
        assert_eq!(project_gdp(1.0e12, 0.03, -1.0), 0.0);
    }

    #[test]
    fn tier_scores_increase_with_tier() {
        assert!(tier_score(EconomicTier::Impoverished) < tier_score(EconomicTier::Developing));
        assert!(tier_score(EconomicTier::Strong) < tier_score(EconomicTier::Extravagant));
    }
}
