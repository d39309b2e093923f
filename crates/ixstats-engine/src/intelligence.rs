//! Intelligence advisories derived from a component selection.
//!
//! The intelligence layer turns the raw reports into ranked, actionable
//! items for the dashboard: active conflicts, uncovered categories,
//! synergy opportunities, and low-score alerts. Items are ordered most
//! severe first; ordering within a severity is stable.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use ixstats_types::{
    ComponentCategory, ComponentType, EffectivenessReport, IntelligenceItem, IntelligenceKind,
    RiskLevel, Severity, StabilityReport,
};

use crate::catalog;
use crate::effectiveness;
use crate::synergy;

/// Conflict multiplier at or below which a conflict is Critical.
const SEVERE_CONFLICT: f64 = 0.75;

/// Overall effectiveness below which a Warning advisory is raised.
const LOW_EFFECTIVENESS: f64 = 40.0;

/// Overall effectiveness below which the advisory becomes Critical.
const CRITICAL_EFFECTIVENESS: f64 = 25.0;

/// Minimum number of synergy partners before a component is suggested.
const OPPORTUNITY_THRESHOLD: usize = 2;

/// Produce the full advisory brief for a selection.
pub fn brief(
    selection: &BTreeSet<ComponentType>,
    report: &EffectivenessReport,
    stability: &StabilityReport,
) -> Vec<IntelligenceItem> {
    let mut items = Vec::new();

    conflict_warnings(selection, report, &mut items);
    coverage_gaps(selection, &mut items);
    synergy_opportunities(selection, report, &mut items);
    score_alerts(report, stability, &mut items);

    // Most severe first; stable within a severity.
    items.sort_by_key(|item| Reverse(item.severity));
    items
}

/// One advisory per active conflict, quantifying the gain from dropping
/// the weaker half of the pair.
fn conflict_warnings(
    selection: &BTreeSet<ComponentType>,
    report: &EffectivenessReport,
    items: &mut Vec<IntelligenceItem>,
) {
    for conflict in &report.conflicts {
        let severity = if conflict.multiplier <= SEVERE_CONFLICT {
            Severity::Critical
        } else {
            Severity::Warning
        };

        // Dropping the weaker half usually resolves the conflict at the
        // smallest cost to the base mean.
        let weaker = if catalog::base_score(conflict.first) <= catalog::base_score(conflict.second)
        {
            conflict.first
        } else {
            conflict.second
        };
        let mut without = selection.clone();
        without.remove(&weaker);
        let projected = effectiveness::evaluate(&without).overall - report.overall;

        items.push(IntelligenceItem {
            severity,
            kind: IntelligenceKind::ConflictWarning,
            message: format!(
                "{:?} conflicts with {:?} (x{:.2}); dropping {weaker:?} projects {projected:+.1}",
                conflict.first, conflict.second, conflict.multiplier
            ),
            components: vec![conflict.first, conflict.second],
            projected_delta: Some(projected),
        });
    }
}

/// One informational advisory per category with no selected component.
fn coverage_gaps(selection: &BTreeSet<ComponentType>, items: &mut Vec<IntelligenceItem>) {
    let covered: BTreeSet<ComponentCategory> =
        selection.iter().map(|&c| catalog::category(c)).collect();

    for category in ComponentCategory::ALL {
        if !covered.contains(&category) {
            items.push(IntelligenceItem {
                severity: Severity::Info,
                kind: IntelligenceKind::CoverageGap,
                message: format!("No {category:?} component selected"),
                components: Vec::new(),
                projected_delta: None,
            });
        }
    }
}

/// Suggest unselected components that would synergize with at least
/// [`OPPORTUNITY_THRESHOLD`] already-selected components and raise the
/// overall score.
fn synergy_opportunities(
    selection: &BTreeSet<ComponentType>,
    report: &EffectivenessReport,
    items: &mut Vec<IntelligenceItem>,
) {
    for candidate in catalog::ALL_COMPONENTS {
        if selection.contains(&candidate) {
            continue;
        }
        let partners = synergy::synergy_partners(candidate, selection);
        if partners.len() < OPPORTUNITY_THRESHOLD {
            continue;
        }

        let mut with = selection.clone();
        with.insert(candidate);
        let projected = effectiveness::evaluate(&with).overall - report.overall;
        if projected <= 0.0 {
            // The candidate also drags in conflicts that outweigh the gain.
            continue;
        }

        items.push(IntelligenceItem {
            severity: Severity::Info,
            kind: IntelligenceKind::SynergyOpportunity,
            message: format!(
                "Adding {candidate:?} would synergize with {} selected components ({projected:+.1})",
                partners.len()
            ),
            components: vec![candidate],
            projected_delta: Some(projected),
        });
    }
}

/// Low-effectiveness and stability-risk alerts.
fn score_alerts(
    report: &EffectivenessReport,
    stability: &StabilityReport,
    items: &mut Vec<IntelligenceItem>,
) {
    if report.overall < LOW_EFFECTIVENESS {
        let severity = if report.overall < CRITICAL_EFFECTIVENESS {
            Severity::Critical
        } else {
            Severity::Warning
        };
        items.push(IntelligenceItem {
            severity,
            kind: IntelligenceKind::LowEffectiveness,
            message: format!("Overall effectiveness is {:.1}", report.overall),
            components: Vec::new(),
            projected_delta: None,
        });
    }

    match stability.risk {
        RiskLevel::Unstable => items.push(IntelligenceItem {
            severity: Severity::Warning,
            kind: IntelligenceKind::StabilityRisk,
            message: format!("Stability is {:.1} (Unstable)", stability.score),
            components: Vec::new(),
            projected_delta: None,
        }),
        RiskLevel::Critical => items.push(IntelligenceItem {
            severity: Severity::Critical,
            kind: IntelligenceKind::StabilityRisk,
            message: format!("Stability is {:.1} (Critical)", stability.score),
            components: Vec::new(),
            projected_delta: None,
        }),
        RiskLevel::Stable | RiskLevel::Moderate => {}
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::stability;
    use ixstats_types::EconomicTier;

    fn set(components: &[ComponentType]) -> BTreeSet<ComponentType> {
        components.iter().copied().collect()
    }

    fn brief_for(selection: &BTreeSet<ComponentType>) -> Vec<IntelligenceItem> {
        let report = effectiveness::evaluate(selection);
        let stab = stability::evaluate(selection, &report, EconomicTier::Strong);
        brief(selection, &report, &stab)
    }

    #[test]
    fn empty_selection_flags_every_gap() {
        let items = brief_for(&BTreeSet::new());
        let gaps = items
            .iter()
            .filter(|i| i.kind == IntelligenceKind::CoverageGap)
            .count();
        assert_eq!(gaps, 5);
        // Zero effectiveness is a critical alert.
        assert!(items
            .iter()
            .any(|i| i.kind == IntelligenceKind::LowEffectiveness
                && i.severity == Severity::Critical));
    }

    #[test]
    fn severe_conflicts_are_critical() {
        let items = brief_for(&set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
        ]));
        let conflict = items
            .iter()
            .find(|i| i.kind == IntelligenceKind::ConflictWarning)
            .map(|i| i.severity);
        assert_eq!(conflict, Some(Severity::Critical));
    }

    #[test]
    fn mild_conflicts_are_warnings() {
        let items = brief_for(&set(&[
            ComponentType::SocialPressure,
            ComponentType::RuleOfLaw,
        ]));
        let conflict = items
            .iter()
            .find(|i| i.kind == IntelligenceKind::ConflictWarning)
            .map(|i| i.severity);
        assert_eq!(conflict, Some(Severity::Warning));
    }

    #[test]
    fn conflict_advisory_projects_a_gain() {
        let items = brief_for(&set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
        ]));
        let delta = items
            .iter()
            .find(|i| i.kind == IntelligenceKind::ConflictWarning)
            .and_then(|i| i.projected_delta);
        // Removing the weaker half resolves the 0.60 conflict; the score
        // must improve.
        assert!(delta.is_some_and(|d| d > 0.0));
    }

    #[test]
    fn opportunities_require_two_partners() {
        // TechnocraticProcess + ProfessionalBureaucracy are both synergy
        // partners of TechnocraticAgencies.
        let items = brief_for(&set(&[
            ComponentType::TechnocraticProcess,
            ComponentType::ProfessionalBureaucracy,
        ]));
        assert!(items.iter().any(|i| {
            i.kind == IntelligenceKind::SynergyOpportunity
                && i.components == vec![ComponentType::TechnocraticAgencies]
        }));

        // A single selected component can never produce an opportunity.
        let items = brief_for(&set(&[ComponentType::TechnocraticProcess]));
        assert!(!items
            .iter()
            .any(|i| i.kind == IntelligenceKind::SynergyOpportunity));
    }

    #[test]
    fn items_are_ordered_most_severe_first() {
        let items = brief_for(&set(&[
            ComponentType::DemocraticProcess,
            ComponentType::AutocraticProcess,
        ]));
        for pair in items.windows(2) {
            assert!(pair[0].severity >= pair[1].severity);
        }
    }
}
