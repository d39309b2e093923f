//! The atomic component catalog: base scores, categories, and upkeep.
//!
//! Every [`ComponentType`] has a static specification. Base scores express
//! how effective the component is in isolation on a 0-100 scale; the
//! synergy and conflict tables in [`crate::synergy`] adjust the aggregate
//! when components are combined.

use ixstats_types::{ComponentCategory, ComponentType};

/// Every component in the catalog, grouped by category in display order.
pub const ALL_COMPONENTS: [ComponentType; 24] = [
    // Power distribution
    ComponentType::CentralizedPower,
    ComponentType::FederalSystem,
    ComponentType::ConfederateSystem,
    ComponentType::UnitarySystem,
    // Decision process
    ComponentType::DemocraticProcess,
    ComponentType::AutocraticProcess,
    ComponentType::TechnocraticProcess,
    ComponentType::ConsensusProcess,
    ComponentType::OligarchicProcess,
    // Legitimacy
    ComponentType::ElectoralLegitimacy,
    ComponentType::TraditionalLegitimacy,
    ComponentType::PerformanceLegitimacy,
    ComponentType::CharismaticLegitimacy,
    ComponentType::ReligiousLegitimacy,
    // Institutions
    ComponentType::ProfessionalBureaucracy,
    ComponentType::MilitaryAdministration,
    ComponentType::IndependentJudiciary,
    ComponentType::PartisanInstitutions,
    ComponentType::TechnocraticAgencies,
    // Control mechanisms
    ComponentType::RuleOfLaw,
    ComponentType::SurveillanceSystem,
    ComponentType::EconomicIncentives,
    ComponentType::SocialPressure,
    ComponentType::MilitaryEnforcement,
];

/// Base effectiveness score of a component in isolation (0-100).
pub const fn base_score(component: ComponentType) -> u32 {
    match component {
        // Power distribution
        ComponentType::CentralizedPower => 75,
        ComponentType::FederalSystem => 70,
        ComponentType::ConfederateSystem => 58,
        ComponentType::UnitarySystem => 72,
        // Decision process
        ComponentType::DemocraticProcess => 68,
        ComponentType::AutocraticProcess => 72,
        ComponentType::TechnocraticProcess => 85,
        ComponentType::ConsensusProcess => 58,
        ComponentType::OligarchicProcess => 62,
        // Legitimacy
        ComponentType::ElectoralLegitimacy => 75,
        ComponentType::TraditionalLegitimacy => 68,
        ComponentType::PerformanceLegitimacy => 82,
        ComponentType::CharismaticLegitimacy => 65,
        ComponentType::ReligiousLegitimacy => 70,
        // Institutions
        ComponentType::ProfessionalBureaucracy => 88,
        ComponentType::MilitaryAdministration => 70,
        ComponentType::IndependentJudiciary => 85,
        ComponentType::PartisanInstitutions => 58,
        ComponentType::TechnocraticAgencies => 86,
        // Control mechanisms
        ComponentType::RuleOfLaw => 90,
        ComponentType::SurveillanceSystem => 72,
        ComponentType::EconomicIncentives => 78,
        ComponentType::SocialPressure => 62,
        ComponentType::MilitaryEnforcement => 65,
    }
}

/// The category a component belongs to.
pub const fn category(component: ComponentType) -> ComponentCategory {
    match component {
        ComponentType::CentralizedPower
        | ComponentType::FederalSystem
        | ComponentType::ConfederateSystem
        | ComponentType::UnitarySystem => ComponentCategory::PowerDistribution,

        ComponentType::DemocraticProcess
        | ComponentType::AutocraticProcess
        | ComponentType::TechnocraticProcess
        | ComponentType::ConsensusProcess
        | ComponentType::OligarchicProcess => ComponentCategory::DecisionProcess,

        ComponentType::ElectoralLegitimacy
        | ComponentType::TraditionalLegitimacy
        | ComponentType::PerformanceLegitimacy
        | ComponentType::CharismaticLegitimacy
        | ComponentType::ReligiousLegitimacy => ComponentCategory::Legitimacy,

        ComponentType::ProfessionalBureaucracy
        | ComponentType::MilitaryAdministration
        | ComponentType::IndependentJudiciary
        | ComponentType::PartisanInstitutions
        | ComponentType::TechnocraticAgencies => ComponentCategory::Institutions,

        ComponentType::RuleOfLaw
        | ComponentType::SurveillanceSystem
        | ComponentType::EconomicIncentives
        | ComponentType::SocialPressure
        | ComponentType::MilitaryEnforcement => ComponentCategory::ControlMechanisms,
    }
}

/// Annual upkeep of a component in simulation dollars per capita.
///
/// Institutions and pervasive control mechanisms cost more to run than
/// abstract legitimacy claims.
pub const fn upkeep_per_capita(component: ComponentType) -> f64 {
    match component {
        ComponentType::ProfessionalBureaucracy => 120.0,
        ComponentType::TechnocraticAgencies => 110.0,
        ComponentType::MilitaryAdministration | ComponentType::MilitaryEnforcement => 95.0,
        ComponentType::SurveillanceSystem => 80.0,
        ComponentType::IndependentJudiciary => 70.0,
        ComponentType::PartisanInstitutions => 60.0,
        ComponentType::RuleOfLaw | ComponentType::EconomicIncentives => 50.0,
        ComponentType::FederalSystem | ComponentType::ConfederateSystem => 40.0,
        ComponentType::CentralizedPower
        | ComponentType::UnitarySystem
        | ComponentType::DemocraticProcess
        | ComponentType::TechnocraticProcess => 30.0,
        ComponentType::AutocraticProcess
        | ComponentType::ConsensusProcess
        | ComponentType::OligarchicProcess => 20.0,
        ComponentType::ElectoralLegitimacy => 15.0,
        ComponentType::TraditionalLegitimacy
        | ComponentType::PerformanceLegitimacy
        | ComponentType::CharismaticLegitimacy
        | ComponentType::ReligiousLegitimacy
        | ComponentType::SocialPressure => 5.0,
    }
}

/// All components belonging to the given category, in catalog order.
pub fn components_in(cat: ComponentCategory) -> impl Iterator<Item = ComponentType> {
    ALL_COMPONENTS
        .into_iter()
        .filter(move |&c| category(c) == cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_category() {
        for cat in ComponentCategory::ALL {
            assert!(
                components_in(cat).count() >= 4,
                "category {cat:?} is underpopulated"
            );
        }
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut seen = std::collections::BTreeSet::new();
        for c in ALL_COMPONENTS {
            assert!(seen.insert(c), "duplicate catalog entry {c:?}");
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn base_scores_are_in_range() {
        for c in ALL_COMPONENTS {
            let score = base_score(c);
            assert!((1..=100).contains(&score), "{c:?} score {score} out of range");
        }
    }

    #[test]
    fn upkeep_tracks_institutional_weight() {
        // Staffed institutions cost more to run than legitimacy claims.
        let bureaucracy = upkeep_per_capita(ComponentType::ProfessionalBureaucracy);
        let tradition = upkeep_per_capita(ComponentType::TraditionalLegitimacy);
        assert!(bureaucracy > tradition);

        for c in ALL_COMPONENTS {
            assert!(upkeep_per_capita(c) > 0.0, "{c:?} has no upkeep");
        }
    }

    #[test]
    fn rule_of_law_is_the_strongest_control() {
        let strongest = components_in(ComponentCategory::ControlMechanisms)
            .max_by_key(|&c| base_score(c));
        assert_eq!(strongest, Some(ComponentType::RuleOfLaw));
    }
}
