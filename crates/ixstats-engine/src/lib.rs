//! The IxStats atomic component engine.
//!
//! A rule-evaluation system that takes a set of selected government
//! components, cross-references static tables of pairwise synergies,
//! conflicts, and tax multipliers, and folds them into aggregate scores.
//! Everything in this crate is pure table-driven arithmetic: no I/O, no
//! clocks, no randomness.
//!
//! # Modules
//!
//! - [`catalog`] -- Per-component base scores, categories, and upkeep.
//! - [`synergy`] -- Pairwise synergy/conflict tables and detection.
//! - [`effectiveness`] -- The mean-base × multiplier fold.
//! - [`tax`] -- Collection/compliance folds and revenue projection.
//! - [`economy`] -- Tier derivation and tier-capped growth.
//! - [`stability`] -- Weighted stability fold and risk banding.
//! - [`intelligence`] -- Ranked advisories derived from the reports.

pub mod catalog;
pub mod economy;
pub mod effectiveness;
pub mod intelligence;
pub mod stability;
pub mod synergy;
pub mod tax;

use std::collections::BTreeSet;

use ixstats_types::{AtomicState, ComponentType, EconomicTier};

/// Derive the complete [`AtomicState`] for a selection applied to an
/// economy.
///
/// This is the one-call entry point the state manager uses: it runs the
/// effectiveness fold, the tax assessment, the stability fold, and the
/// intelligence brief, in that order, against a consistent snapshot of
/// the selection.
pub fn derive_state(
    selection: &BTreeSet<ComponentType>,
    gdp: f64,
    tier: EconomicTier,
) -> AtomicState {
    let effectiveness = effectiveness::evaluate(selection);
    let tax = tax::assess(selection, gdp);
    let stability = stability::evaluate(selection, &effectiveness, tier);
    let intelligence = intelligence::brief(selection, &effectiveness, &stability);

    tracing::debug!(
        components = effectiveness.component_count,
        overall = effectiveness.overall,
        stability = stability.score,
        advisories = intelligence.len(),
        "Atomic state derived"
    );

    AtomicState {
        effectiveness,
        tax,
        stability,
        intelligence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_state_is_internally_consistent() {
        let selection: BTreeSet<ComponentType> = [
            ComponentType::TechnocraticProcess,
            ComponentType::TechnocraticAgencies,
            ComponentType::PerformanceLegitimacy,
            ComponentType::RuleOfLaw,
        ]
        .into_iter()
        .collect();

        let state = derive_state(&selection, 2.5e12, EconomicTier::Strong);

        assert_eq!(state.effectiveness.component_count, 4);
        assert!(state.effectiveness.overall > 80.0);
        assert!(state.tax.projected_revenue > 0.0);
        assert_eq!(state.stability.risk, ixstats_types::RiskLevel::Stable);
        // A coherent technocracy has no conflict advisories.
        assert!(!state
            .intelligence
            .iter()
            .any(|i| i.kind == ixstats_types::IntelligenceKind::ConflictWarning));
    }

    #[test]
    fn derive_state_handles_the_empty_government() {
        let state = derive_state(&BTreeSet::new(), 1.0e12, EconomicTier::Developing);
        assert!((state.effectiveness.overall - 0.0).abs() < f64::EPSILON);
        assert!(!state.intelligence.is_empty());
    }
}
