//! Tax integration: component selections shape how well a government
//! collects what it assesses.
//!
//! Each component contributes additive percentage-point modifiers to two
//! baselines: **collection efficiency** (how much of the assessed tax the
//! state actually captures) and **compliance rate** (how much taxpayers
//! pay without enforcement). Both are clamped to 0-100 after modifiers.
//!
//! The effective rate of a tax category is then
//! `base_rate * collection/100 * compliance/100`, and projected revenue
//! sums the effective rates over each category's share of nominal GDP.

use std::collections::{BTreeMap, BTreeSet};

use ixstats_types::{ComponentType, TaxCategory, TaxProfile};

/// Baseline collection efficiency before component modifiers (percent).
pub const BASE_COLLECTION: f64 = 65.0;

/// Baseline voluntary compliance before component modifiers (percent).
pub const BASE_COMPLIANCE: f64 = 60.0;

// ---------------------------------------------------------------------------
// Per-component modifier tables (percentage points)
// ---------------------------------------------------------------------------

/// Collection-efficiency modifier of a component, in percentage points.
pub const fn collection_modifier(component: ComponentType) -> f64 {
    match component {
        ComponentType::ProfessionalBureaucracy => 8.0,
        ComponentType::TechnocraticAgencies => 6.0,
        ComponentType::RuleOfLaw => 5.0,
        ComponentType::SurveillanceSystem => 4.0,
        ComponentType::CentralizedPower | ComponentType::EconomicIncentives => 3.0,
        ComponentType::UnitarySystem | ComponentType::TechnocraticProcess => 2.0,
        ComponentType::FederalSystem | ComponentType::MilitaryAdministration => -2.0,
        ComponentType::PartisanInstitutions => -4.0,
        ComponentType::ConfederateSystem => -6.0,
        _ => 0.0,
    }
}

/// Compliance-rate modifier of a component, in percentage points.
pub const fn compliance_modifier(component: ComponentType) -> f64 {
    match component {
        ComponentType::RuleOfLaw => 10.0,
        ComponentType::IndependentJudiciary | ComponentType::SurveillanceSystem => 6.0,
        ComponentType::PerformanceLegitimacy => 5.0,
        ComponentType::ElectoralLegitimacy => 4.0,
        ComponentType::TraditionalLegitimacy
        | ComponentType::ReligiousLegitimacy
        | ComponentType::SocialPressure => 3.0,
        ComponentType::DemocraticProcess | ComponentType::CharismaticLegitimacy => 2.0,
        ComponentType::AutocraticProcess | ComponentType::PartisanInstitutions => -3.0,
        ComponentType::MilitaryEnforcement => -4.0,
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Category tables
// ---------------------------------------------------------------------------

/// Statutory base rate for a tax category, as a fraction of the base.
pub const fn base_rate(category: TaxCategory) -> f64 {
    match category {
        TaxCategory::Income => 0.22,
        TaxCategory::Corporate => 0.24,
        TaxCategory::Consumption => 0.15,
        TaxCategory::Property => 0.08,
        TaxCategory::Excise => 0.12,
    }
}

/// Share of nominal GDP each category's tax base represents.
pub const fn gdp_share(category: TaxCategory) -> f64 {
    match category {
        TaxCategory::Income => 0.42,
        TaxCategory::Corporate => 0.22,
        TaxCategory::Consumption => 0.24,
        TaxCategory::Property => 0.07,
        TaxCategory::Excise => 0.05,
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Assess the tax posture of a component selection against a nominal GDP.
///
/// A non-finite or negative GDP is treated as zero: the rates are still
/// meaningful, the absolute projection is not.
pub fn assess(selection: &BTreeSet<ComponentType>, gdp: f64) -> TaxProfile {
    let collection = fold_modifiers(selection, BASE_COLLECTION, collection_modifier);
    let compliance = fold_modifiers(selection, BASE_COMPLIANCE, compliance_modifier);

    let mut effective_rates: BTreeMap<TaxCategory, f64> = BTreeMap::new();
    let mut revenue_share = 0.0;
    for category in TaxCategory::ALL {
        let effective = base_rate(category) * (collection / 100.0) * (compliance / 100.0);
        effective_rates.insert(category, effective);
        revenue_share += effective * gdp_share(category);
    }

    let gdp = if gdp.is_finite() && gdp > 0.0 { gdp } else { 0.0 };

    TaxProfile {
        collection_efficiency: collection,
        compliance_rate: compliance,
        effective_rates,
        projected_revenue_share: revenue_share,
        projected_revenue: revenue_share * gdp,
    }
}

/// Fold a modifier table over the selection and clamp the result to 0-100.
fn fold_modifiers(
    selection: &BTreeSet<ComponentType>,
    baseline: f64,
    modifier: fn(ComponentType) -> f64,
) -> f64 {
    let adjusted = selection.iter().fold(baseline, |acc, &c| acc + modifier(c));
    adjusted.clamp(0.0, 100.0)
}
