//! The effectiveness fold: selection set in, aggregate score out.
//!
//! The computation is deliberately simple arithmetic over the static
//! tables:
//!
//! ```text
//! base_mean  = mean(base_score(c) for c in selection)
//! multiplier = product(synergy multipliers) * product(conflict multipliers)
//! overall    = clamp(base_mean * multiplier, 0, 100)
//! ```
//!
//! An empty selection yields a zero report with no applied rules. A
//! single-component selection has multiplier 1.0 because no pair rule
//! can apply.

use std::collections::{BTreeMap, BTreeSet};

use ixstats_types::{ComponentCategory, ComponentType, EffectivenessReport};

use crate::catalog;
use crate::synergy;

/// Evaluate the effectiveness of a component selection.
pub fn evaluate(selection: &BTreeSet<ComponentType>) -> EffectivenessReport {
    if selection.is_empty() {
        return empty_report();
    }

    // The catalog has 24 components, so the count always fits in u32.
    let component_count = u32::try_from(selection.len()).unwrap_or(u32::MAX);
    let score_sum: u32 = selection.iter().map(|&c| catalog::base_score(c)).sum();
    // component_count >= 1 here, so the division is well-defined.
    let base_mean = f64::from(score_sum) / f64::from(component_count);

    let synergies = synergy::synergies_in(selection);
    let conflicts = synergy::conflicts_in(selection);

    let combined_multiplier = synergies
        .iter()
        .chain(conflicts.iter())
        .map(|r| r.multiplier)
        .product::<f64>();

    let overall = (base_mean * combined_multiplier).clamp(0.0, 100.0);

    EffectivenessReport {
        overall,
        base_mean,
        combined_multiplier,
        category_scores: category_means(selection),
        synergies: synergies.into_iter().map(synergy::PairRule::to_modifier).collect(),
        conflicts: conflicts.into_iter().map(synergy::PairRule::to_modifier).collect(),
        component_count,
        categories_covered: covered_categories(selection),
    }
}

/// Mean base score per category covered by the selection.
fn category_means(selection: &BTreeSet<ComponentType>) -> BTreeMap<ComponentCategory, f64> {
    let mut sums: BTreeMap<ComponentCategory, (u32, u32)> = BTreeMap::new();
    for &component in selection {
        let entry = sums.entry(catalog::category(component)).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(catalog::base_score(component));
        entry.1 = entry.1.saturating_add(1);
    }
    sums.into_iter()
        .filter(|&(_, (_, n))| n > 0)
        .map(|(cat, (sum, n))| (cat, f64::from(sum) / f64::from(n)))
        .collect()
}

/// Number of distinct categories covered by the selection.
fn covered_categories(selection: &BTreeSet<ComponentType>) -> u32 {
    let covered: BTreeSet<ComponentCategory> =
        selection.iter().map(|&c| catalog::category(c)).collect();
    u32::try_from(covered.len()).unwrap_or(u32::MAX)
}

/// The report for an empty selection: all zeros, no rules.
fn empty_report() -> EffectivenessReport {
    EffectivenessReport {
        overall: 0.0,
        base_mean: 0.0,
        combined_multiplier: 1.0,
        category_scores: BTreeMap::new(),
        synergies: Vec::new(),
        conflicts: Vec::new(),
        component_count: 0,
        categories_covered: 0,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn set(components: &[ComponentType]) -> BTreeSet<ComponentType> {
        components.iter().copied().collect()
    }

    #[test]
    fn empty_selection_scores_zero() {
        let report = evaluate(&BTreeSet::new());
        assert_eq!(report.overall, 0.0);
        assert_eq!(report.component_count, 0);
        assert_eq!(report.combined_multiplier, 1.0);
        assert!(report.synergies.is_empty());
        assert!(report.conflicts.is_empty());
    }

    #[test]
    fn single_component_has_unit_multiplier() {
        let report = evaluate(&set(&[ComponentType::RuleOfLaw]));
        assert_eq!(report.base_mean, 90.0);
        assert_eq!(report.combined_multiplier, 1.0);
        assert_eq!(report.overall, 90.0);
        assert_eq!(report.categories_covered, 1);
    }

    #[test]
    fn synergy_raises_the_aggregate() {
        // RuleOfLaw (90) + IndependentJudiciary (85): mean 87.5, synergy 1.20.
        let report = evaluate(&set(&[
            ComponentType::RuleOfLaw,
            ComponentType::IndependentJudiciary,
        ]));
        assert_eq!(report.base_mean, 87.5);
        assert_eq!(report.synergies.len(), 1);
        assert!(report.conflicts.is_empty());
        // 87.5 * 1.20 = 105 -> clamped to 100.
        assert_eq!(report.overall, 100.0);
    }

    #[test]
    fn conflict_lowers_the_aggregate() {
        // DemocraticProcess (68) + AutocraticProcess (72): mean 70, conflict 0.60.
        let report = evaluate(&set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
        ]));
        assert_eq!(report.base_mean, 70.0);
        assert_eq!(report.conflicts.len(), 1);
        assert!((report.overall - 42.0).abs() < 1e-9);
    }

    #[test]
    fn synergies_and_conflicts_compose_multiplicatively() {
        // ElectoralLegitimacy + DemocraticProcess synergize (1.15) while
        // AutocraticProcess conflicts with both (0.60 and 0.75).
        let selection = set(&[
            ComponentType::DemocraticProcess,
            ComponentType::ElectoralLegitimacy,
            ComponentType::AutocraticProcess,
        ]);
        let report = evaluate(&selection);
        assert_eq!(report.synergies.len(), 1);
        assert_eq!(report.conflicts.len(), 2);

        let expected_multiplier = 1.15 * 0.60 * 0.75;
        assert!((report.combined_multiplier - expected_multiplier).abs() < 1e-12);

        let base_mean = f64::from(68 + 75 + 72) / 3.0;
        assert!((report.overall - base_mean * expected_multiplier).abs() < 1e-9);
    }

    #[test]
    fn category_scores_average_within_category() {
        let report = evaluate(&set(&[
            ComponentType::RuleOfLaw,          // ControlMechanisms, 90
            ComponentType::SurveillanceSystem, // ControlMechanisms, 72
            ComponentType::TechnocraticProcess, // DecisionProcess, 85
        ]));
        assert_eq!(report.categories_covered, 2);
        assert_eq!(
            report.category_scores[&ComponentCategory::ControlMechanisms],
            81.0
        );
        assert_eq!(
            report.category_scores[&ComponentCategory::DecisionProcess],
            85.0
        );
    }

    #[test]
    fn overall_never_leaves_the_unit_range() {
        // A maximally synergistic technocratic build.
        let high = evaluate(&set(&[
            ComponentType::TechnocraticProcess,
            ComponentType::TechnocraticAgencies,
            ComponentType::ProfessionalBureaucracy,
            ComponentType::PerformanceLegitimacy,
            ComponentType::RuleOfLaw,
            ComponentType::IndependentJudiciary,
        ]));
        assert!(high.overall <= 100.0);

        // A maximally conflicted build.
        let low = evaluate(&set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
            ComponentType::ElectoralLegitimacy,
            ComponentType::IndependentJudiciary,
            ComponentType::PartisanInstitutions,
        ]));
        assert!(low.overall >= 0.0);
        assert!(low.overall < low.base_mean);
    }
}
