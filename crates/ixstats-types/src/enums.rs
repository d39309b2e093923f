//! Enumeration types for the IxStats simulation.
//!
//! The atomic component catalog, tier classifications, tax categories,
//! vault entry types, and notification/advisory levels.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Atomic component categories
// ---------------------------------------------------------------------------

/// The functional category of an atomic government component.
///
/// Every [`ComponentType`] belongs to exactly one category. A well-formed
/// government covers several categories; the intelligence layer flags
/// configurations that leave a category empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ComponentCategory {
    /// How power is distributed across the territory.
    PowerDistribution,
    /// How collective decisions are made.
    DecisionProcess,
    /// Where the government's claim to rule comes from.
    Legitimacy,
    /// The administrative bodies that execute policy.
    Institutions,
    /// How compliance with policy is achieved.
    ControlMechanisms,
}

impl ComponentCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::PowerDistribution,
        Self::DecisionProcess,
        Self::Legitimacy,
        Self::Institutions,
        Self::ControlMechanisms,
    ];
}

// ---------------------------------------------------------------------------
// Atomic components
// ---------------------------------------------------------------------------

/// An atomic building block of a simulated government.
///
/// Users assemble a government by selecting a set of components from this
/// fixed catalog. The effectiveness engine cross-references the selection
/// against static synergy and conflict tables to derive aggregate scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ComponentType {
    // --- Power distribution ---
    /// All authority concentrated in a single national government.
    CentralizedPower,
    /// Authority constitutionally split between national and regional tiers.
    FederalSystem,
    /// A loose league of regions that delegate little to the center.
    ConfederateSystem,
    /// A single sovereign tier that devolves administration, not authority.
    UnitarySystem,

    // --- Decision process ---
    /// Decisions made through contested elections and majority rule.
    DemocraticProcess,
    /// Decisions made by a single unaccountable executive.
    AutocraticProcess,
    /// Decisions delegated to credentialed experts.
    TechnocraticProcess,
    /// Decisions requiring broad agreement among stakeholders.
    ConsensusProcess,
    /// Decisions made by a small self-perpetuating elite.
    OligarchicProcess,

    // --- Legitimacy sources ---
    /// Rule justified by free and fair elections.
    ElectoralLegitimacy,
    /// Rule justified by custom, inheritance, or historical continuity.
    TraditionalLegitimacy,
    /// Rule justified by delivering prosperity and competent governance.
    PerformanceLegitimacy,
    /// Rule justified by the personal authority of a leader.
    CharismaticLegitimacy,
    /// Rule justified by religious doctrine or divine sanction.
    ReligiousLegitimacy,

    // --- Institutions ---
    /// A merit-recruited, politically neutral civil service.
    ProfessionalBureaucracy,
    /// Civil administration run by the armed forces.
    MilitaryAdministration,
    /// Courts insulated from the executive and legislature.
    IndependentJudiciary,
    /// Administrative bodies staffed by ruling-party loyalists.
    PartisanInstitutions,
    /// Specialized regulatory agencies led by domain experts.
    TechnocraticAgencies,

    // --- Control mechanisms ---
    /// Compliance achieved through predictable, equally applied law.
    RuleOfLaw,
    /// Compliance achieved through monitoring of the population.
    SurveillanceSystem,
    /// Compliance achieved through subsidies, taxes, and market access.
    EconomicIncentives,
    /// Compliance achieved through community norms and reputation.
    SocialPressure,
    /// Compliance achieved through the threat of armed force.
    MilitaryEnforcement,
}

// ---------------------------------------------------------------------------
// Economic tiers
// ---------------------------------------------------------------------------

/// Economic development tier, derived from GDP per capita.
///
/// Thresholds (in simulation dollars per capita):
/// `[0, 10k)` Impoverished, `[10k, 25k)` Developing, `[25k, 35k)` Developed,
/// `[35k, 45k)` Healthy, `[45k, 65k)` Strong, `[65k, 100k)` `VeryStrong`,
/// `[100k, inf)` Extravagant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EconomicTier {
    /// GDP per capita below 10,000.
    Impoverished,
    /// GDP per capita 10,000 to 25,000.
    Developing,
    /// GDP per capita 25,000 to 35,000.
    Developed,
    /// GDP per capita 35,000 to 45,000.
    Healthy,
    /// GDP per capita 45,000 to 65,000.
    Strong,
    /// GDP per capita 65,000 to 100,000.
    VeryStrong,
    /// GDP per capita 100,000 and above.
    Extravagant,
}

/// Population scale tier, derived from total population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum PopulationTier {
    /// Below 1 million.
    Tier1,
    /// 1 million to 10 million.
    Tier2,
    /// 10 million to 30 million.
    Tier3,
    /// 30 million to 60 million.
    Tier4,
    /// 60 million to 120 million.
    Tier5,
    /// 120 million to 350 million.
    Tier6,
    /// 350 million and above.
    Tier7,
}

// ---------------------------------------------------------------------------
// Tax categories
// ---------------------------------------------------------------------------

/// A category of taxation with its own base rate and GDP share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum TaxCategory {
    /// Personal income taxation.
    Income,
    /// Corporate profit taxation.
    Corporate,
    /// Sales and value-added taxation.
    Consumption,
    /// Land and real-estate taxation.
    Property,
    /// Duties on specific goods (fuel, alcohol, tobacco).
    Excise,
}

impl TaxCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Income,
        Self::Corporate,
        Self::Consumption,
        Self::Property,
        Self::Excise,
    ];
}

// ---------------------------------------------------------------------------
// Vault entry types
// ---------------------------------------------------------------------------

/// The category of a credits movement in the vault ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum VaultEntryType {
    /// Credits added to the vault from outside.
    Deposit,
    /// Credits removed from the vault by the owner.
    Withdrawal,
    /// Credits sent to another country's vault.
    Transfer,
    /// Credits spent on a catalog purchase.
    Purchase,
    /// Credits granted by the simulation (events, achievements).
    Reward,
    /// Manual correction applied by an administrator.
    Adjustment,
}

impl VaultEntryType {
    /// Whether this entry type credits the vault (increases the balance).
    pub const fn is_credit(self) -> bool {
        matches!(self, Self::Deposit | Self::Reward)
    }
}

// ---------------------------------------------------------------------------
// Notification and advisory levels
// ---------------------------------------------------------------------------

/// Severity of a notification or intelligence advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Severity {
    /// Informational -- no action required.
    Info,
    /// Something is off but not critical.
    Warning,
    /// Immediate attention required.
    Critical,
}

/// Stability risk band derived from the stability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RiskLevel {
    /// Stability score 75 and above.
    Stable,
    /// Stability score 50 to 75.
    Moderate,
    /// Stability score 25 to 50.
    Unstable,
    /// Stability score below 25.
    Critical,
}

/// The kind of advisory produced by the intelligence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum IntelligenceKind {
    /// Two selected components actively conflict.
    ConflictWarning,
    /// A component category has no selected component.
    CoverageGap,
    /// An unselected component would synergize with the current selection.
    SynergyOpportunity,
    /// Overall effectiveness is below the acceptable floor.
    LowEffectiveness,
    /// The stability risk band is Unstable or Critical.
    StabilityRisk,
}
