//! Pairwise synergy and conflict tables.
//!
//! A synergy is a predefined multiplier greater than 1.0 applied when two
//! specific components are selected together; a conflict is a multiplier
//! below 1.0. Pairs are unordered: each rule is stored in one orientation
//! and detection checks both.
//!
//! The tables are configuration data. Changing a row changes game balance,
//! not code behavior, so rows are pinned by tests rather than documented
//! individually.

use std::collections::BTreeSet;

use ixstats_types::{AppliedModifier, ComponentType};

// ---------------------------------------------------------------------------
// Rule type
// ---------------------------------------------------------------------------

/// A pairwise component rule with its effectiveness multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRule {
    /// First component of the unordered pair.
    pub first: ComponentType,
    /// Second component of the unordered pair.
    pub second: ComponentType,
    /// Multiplier applied to the aggregate score when both are selected.
    pub multiplier: f64,
}

impl PairRule {
    /// Whether both components of this rule are present in the selection.
    pub fn applies_to(&self, selection: &BTreeSet<ComponentType>) -> bool {
        selection.contains(&self.first) && selection.contains(&self.second)
    }

    /// The other half of the pair, if the given component is one half.
    pub fn partner_of(&self, component: ComponentType) -> Option<ComponentType> {
        if self.first == component {
            Some(self.second)
        } else if self.second == component {
            Some(self.first)
        } else {
            None
        }
    }

    /// Convert to the wire representation.
    pub const fn to_modifier(self) -> AppliedModifier {
        AppliedModifier {
            first: self.first,
            second: self.second,
            multiplier: self.multiplier,
        }
    }
}

/// Shorthand for building a table row.
const fn rule(first: ComponentType, second: ComponentType, multiplier: f64) -> PairRule {
    PairRule {
        first,
        second,
        multiplier,
    }
}

// ---------------------------------------------------------------------------
// Synergy table (multiplier > 1.0)
// ---------------------------------------------------------------------------

/// All synergy rules.
pub const SYNERGIES: [PairRule; 14] = [
    rule(ComponentType::TechnocraticProcess, ComponentType::TechnocraticAgencies, 1.15),
    rule(ComponentType::TechnocraticProcess, ComponentType::PerformanceLegitimacy, 1.12),
    rule(ComponentType::RuleOfLaw, ComponentType::IndependentJudiciary, 1.20),
    rule(ComponentType::RuleOfLaw, ComponentType::ProfessionalBureaucracy, 1.12),
    rule(ComponentType::DemocraticProcess, ComponentType::ElectoralLegitimacy, 1.15),
    rule(ComponentType::FederalSystem, ComponentType::DemocraticProcess, 1.08),
    rule(ComponentType::CentralizedPower, ComponentType::AutocraticProcess, 1.10),
    rule(ComponentType::AutocraticProcess, ComponentType::SurveillanceSystem, 1.08),
    rule(ComponentType::TraditionalLegitimacy, ComponentType::ReligiousLegitimacy, 1.10),
    rule(ComponentType::MilitaryAdministration, ComponentType::MilitaryEnforcement, 1.12),
    rule(ComponentType::ProfessionalBureaucracy, ComponentType::TechnocraticAgencies, 1.10),
    rule(ComponentType::EconomicIncentives, ComponentType::PerformanceLegitimacy, 1.08),
    rule(ComponentType::UnitarySystem, ComponentType::ProfessionalBureaucracy, 1.06),
    rule(ComponentType::CharismaticLegitimacy, ComponentType::SocialPressure, 1.06),
];

// ---------------------------------------------------------------------------
// Conflict table (multiplier < 1.0)
// ---------------------------------------------------------------------------

/// All conflict rules.
pub const CONFLICTS: [PairRule; 12] = [
    rule(ComponentType::DemocraticProcess, ComponentType::AutocraticProcess, 0.60),
    rule(ComponentType::DemocraticProcess, ComponentType::SurveillanceSystem, 0.85),
    rule(ComponentType::ElectoralLegitimacy, ComponentType::AutocraticProcess, 0.75),
    rule(ComponentType::ConfederateSystem, ComponentType::CentralizedPower, 0.70),
    rule(ComponentType::IndependentJudiciary, ComponentType::AutocraticProcess, 0.80),
    rule(ComponentType::RuleOfLaw, ComponentType::MilitaryEnforcement, 0.85),
    rule(ComponentType::ConsensusProcess, ComponentType::CentralizedPower, 0.82),
    rule(ComponentType::PartisanInstitutions, ComponentType::IndependentJudiciary, 0.85),
    rule(ComponentType::ReligiousLegitimacy, ComponentType::TechnocraticProcess, 0.88),
    rule(ComponentType::SocialPressure, ComponentType::RuleOfLaw, 0.90),
    rule(ComponentType::CharismaticLegitimacy, ComponentType::ProfessionalBureaucracy, 0.90),
    rule(ComponentType::FederalSystem, ComponentType::CentralizedPower, 0.78),
];

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Synergy rules applicable to the selection, in table order.
pub fn synergies_in(selection: &BTreeSet<ComponentType>) -> Vec<PairRule> {
    SYNERGIES
        .iter()
        .filter(|r| r.applies_to(selection))
        .copied()
        .collect()
}

/// Conflict rules applicable to the selection, in table order.
pub fn conflicts_in(selection: &BTreeSet<ComponentType>) -> Vec<PairRule> {
    CONFLICTS
        .iter()
        .filter(|r| r.applies_to(selection))
        .copied()
        .collect()
}

/// Synergy rules that would pair the given (unselected) component with an
/// already-selected one.
pub fn synergy_partners(
    component: ComponentType,
    selection: &BTreeSet<ComponentType>,
) -> Vec<PairRule> {
    SYNERGIES
        .iter()
        .filter(|r| {
            r.partner_of(component)
                .is_some_and(|partner| selection.contains(&partner))
        })
        .copied()
        .collect()
}
