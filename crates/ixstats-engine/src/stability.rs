//! Stability scoring: a weighted fold over effectiveness, economy,
//! legitimacy, and internal cohesion.
//!
//! ```text
//! score = 0.35 * effectiveness
//!       + 0.25 * tier_score(economic_tier)
//!       + 0.25 * legitimacy
//!       + 0.15 * cohesion
//! ```
//!
//! Legitimacy is the mean base score of the selected Legitimacy-category
//! components, or 50 when none is selected (an unlegitimated government is
//! fragile but not automatically collapsing). Cohesion starts at 100 and
//! loses 12 points per active conflict.

use std::collections::BTreeSet;

use ixstats_types::{
    ComponentCategory, ComponentType, EconomicTier, EffectivenessReport, RiskLevel,
    StabilityReport,
};

use crate::catalog;
use crate::economy;

/// Weight of the effectiveness contribution.
const EFFECTIVENESS_WEIGHT: f64 = 0.35;

/// Weight of the economic-tier contribution.
const ECONOMIC_WEIGHT: f64 = 0.25;

/// Weight of the legitimacy contribution.
const LEGITIMACY_WEIGHT: f64 = 0.25;

/// Weight of the cohesion contribution.
const COHESION_WEIGHT: f64 = 0.15;

/// Legitimacy score assumed when no Legitimacy component is selected.
const UNCLAIMED_LEGITIMACY: f64 = 50.0;

/// Cohesion penalty per active conflict, in points.
const CONFLICT_PENALTY: f64 = 12.0;

/// Evaluate the stability of a selection given its effectiveness report
/// and the country's economic tier.
pub fn evaluate(
    selection: &BTreeSet<ComponentType>,
    effectiveness: &EffectivenessReport,
    tier: EconomicTier,
) -> StabilityReport {
    let legitimacy = legitimacy_score(selection);
    let conflict_count = effectiveness.conflicts.len();
    // Conflict tables are small; the count always fits in u32.
    let conflicts = f64::from(u32::try_from(conflict_count).unwrap_or(u32::MAX));
    let cohesion = (100.0 - CONFLICT_PENALTY * conflicts).max(0.0);

    let effectiveness_term = EFFECTIVENESS_WEIGHT * effectiveness.overall;
    let economic_term = ECONOMIC_WEIGHT * economy::tier_score(tier);
    let legitimacy_term = LEGITIMACY_WEIGHT * legitimacy;
    let cohesion_term = COHESION_WEIGHT * cohesion;

    let score =
        (effectiveness_term + economic_term + legitimacy_term + cohesion_term).clamp(0.0, 100.0);

    StabilityReport {
        score,
        risk: risk_for(score),
        effectiveness_term,
        economic_term,
        legitimacy_term,
        cohesion_term,
    }
}

/// Mean base score of selected Legitimacy components, or the unclaimed
/// default when the category is empty.
fn legitimacy_score(selection: &BTreeSet<ComponentType>) -> f64 {
    let mut sum: u32 = 0;
    let mut count: u32 = 0;
    for &component in selection {
        if catalog::category(component) == ComponentCategory::Legitimacy {
            sum = sum.saturating_add(catalog::base_score(component));
            count = count.saturating_add(1);
        }
    }
    if count == 0 {
        UNCLAIMED_LEGITIMACY
    } else {
        f64::from(sum) / f64::from(count)
    }
}

/// Map a stability score to its risk band.
pub const fn risk_for(score: f64) -> RiskLevel {
    if score >= 75.0 {
        RiskLevel::Stable
    } else if score >= 50.0 {
        RiskLevel::Moderate
    } else if score >= 25.0 {
        RiskLevel::Unstable
    } else {
        RiskLevel::Critical
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::effectiveness;

    fn set(components: &[ComponentType]) -> BTreeSet<ComponentType> {
        components.iter().copied().collect()
    }

    #[test]
    fn risk_bands() {
        assert_eq!(risk_for(75.0), RiskLevel::Stable);
        assert_eq!(risk_for(74.9), RiskLevel::Moderate);
        assert_eq!(risk_for(50.0), RiskLevel::Moderate);
        assert_eq!(risk_for(49.9), RiskLevel::Unstable);
        assert_eq!(risk_for(25.0), RiskLevel::Unstable);
        assert_eq!(risk_for(24.9), RiskLevel::Critical);
    }

    #[test]
    fn unlegitimated_government_uses_default() {
        let selection = set(&[ComponentType::RuleOfLaw]);
        let report = evaluate(&selection, &effectiveness::evaluate(&selection), EconomicTier::Strong);
        assert_eq!(report.legitimacy_term, LEGITIMACY_WEIGHT * UNCLAIMED_LEGITIMACY);
    }

    #[test]
    fn legitimacy_averages_selected_sources() {
        // ElectoralLegitimacy (75) + PerformanceLegitimacy (82): mean 78.5.
        let selection = set(&[
            ComponentType::ElectoralLegitimacy,
            ComponentType::PerformanceLegitimacy,
        ]);
        let report = evaluate(&selection, &effectiveness::evaluate(&selection), EconomicTier::Strong);
        assert!((report.legitimacy_term - LEGITIMACY_WEIGHT * 78.5).abs() < 1e-12);
    }

    #[test]
    fn conflicts_erode_cohesion() {
        let peaceful = set(&[ComponentType::RuleOfLaw, ComponentType::IndependentJudiciary]);
        let contested = set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
            ComponentType::ElectoralLegitimacy,
        ]);

        let calm = evaluate(&peaceful, &effectiveness::evaluate(&peaceful), EconomicTier::Strong);
        let tense =
            evaluate(&contested, &effectiveness::evaluate(&contested), EconomicTier::Strong);

        assert_eq!(calm.cohesion_term, COHESION_WEIGHT * 100.0);
        // Two conflicts: Democratic/Autocratic and Electoral/Autocratic.
        assert_eq!(tense.cohesion_term, COHESION_WEIGHT * 76.0);
        assert!(tense.score < calm.score);
    }

    #[test]
    fn richer_economies_are_steadier() {
        let selection = set(&[ComponentType::RuleOfLaw]);
        let report = effectiveness::evaluate(&selection);
        let poor = evaluate(&selection, &report, EconomicTier::Impoverished);
        let rich = evaluate(&selection, &report, EconomicTier::Extravagant);
        assert!(rich.score > poor.score);
    }

    #[test]
    fn score_is_clamped() {
        let report = evaluate(
            &BTreeSet::new(),
            &effectiveness::evaluate(&BTreeSet::new()),
            EconomicTier::Impoverished,
        );
        assert!(report.score >= 0.0 && report.score <= 100.0);
    }
}
