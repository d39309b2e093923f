//! Core entity and report structs for the IxStats simulation.
//!
//! Covers the `Country` record, vault ledger entries, dashboard
//! notifications, and the derived-state reports produced by the
//! effectiveness engine.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::enums::{
    ComponentCategory, ComponentType, EconomicTier, IntelligenceKind, PopulationTier, RiskLevel,
    Severity, TaxCategory, VaultEntryType,
};
use crate::ids::{CountryId, NotificationId, VaultEntryId};

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

/// A simulated country: the flat record persisted to the database.
///
/// Derived scores (effectiveness, tax, stability) are never stored on the
/// record; they are recomputed from the component selection and published
/// as an [`AtomicState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Country {
    /// Unique country identifier.
    pub id: CountryId,
    /// Display name.
    pub name: String,
    /// URL-safe identifier used by the dashboard routes.
    pub slug: String,
    /// Total population.
    pub population: u64,
    /// Nominal GDP in simulation dollars.
    pub gdp: f64,
    /// GDP per capita in simulation dollars.
    pub gdp_per_capita: f64,
    /// Annual real growth rate as a fraction (0.03 = 3%).
    pub growth_rate: f64,
    /// Economic development tier derived from GDP per capita.
    pub economic_tier: EconomicTier,
    /// Population scale tier.
    pub population_tier: PopulationTier,
    /// When the record was created (real time).
    pub created_at: DateTime<Utc>,
    /// When the record was last updated (real time).
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Vault ledger
// ---------------------------------------------------------------------------

/// A single row in a country's vault ledger.
///
/// Entries are append-only. `balance_after` carries the running balance so
/// statements can be rendered without replaying the full history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct VaultEntry {
    /// Unique entry identifier.
    pub id: VaultEntryId,
    /// The vault (country) this entry belongs to.
    pub country_id: CountryId,
    /// The category of credits movement.
    pub entry_type: VaultEntryType,
    /// Magnitude of the movement. Always strictly positive.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// Signed effect on the balance (+amount for credits, -amount for debits).
    #[ts(as = "String")]
    pub signed_delta: Decimal,
    /// Running balance after this entry was applied.
    #[ts(as = "String")]
    pub balance_after: Decimal,
    /// Human-readable reason (e.g. "WEEKLY_STIPEND", "FLAG_PURCHASE").
    pub reason: String,
    /// Optional reference to a related entity (e.g. a purchase order).
    pub reference_id: Option<Uuid>,
    /// The other vault involved in a transfer, if any.
    pub counterparty: Option<CountryId>,
    /// When the entry was recorded (real time).
    pub created_at: DateTime<Utc>,
    /// The in-game instant at which the entry was recorded.
    pub ix_timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// A dashboard notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// Unique notification identifier.
    pub id: NotificationId,
    /// The country this notification concerns, if any.
    pub country_id: Option<CountryId>,
    /// Severity of the notification.
    pub level: Severity,
    /// Short headline shown in the notification list.
    pub title: String,
    /// Full message body.
    pub message: String,
    /// Whether the user has read the notification.
    pub read: bool,
    /// When the notification was created (real time).
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Effectiveness report
// ---------------------------------------------------------------------------

/// A synergy or conflict rule that applied to a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AppliedModifier {
    /// First component of the pair.
    pub first: ComponentType,
    /// Second component of the pair.
    pub second: ComponentType,
    /// The multiplier applied (> 1.0 for synergies, < 1.0 for conflicts).
    pub multiplier: f64,
}

/// The full effectiveness breakdown for a component selection.
///
/// `overall = clamp(base_mean * combined_multiplier, 0, 100)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EffectivenessReport {
    /// Aggregate effectiveness score, clamped to 0-100.
    pub overall: f64,
    /// Unweighted mean of the selected components' base scores.
    pub base_mean: f64,
    /// Product of every applicable synergy and conflict multiplier.
    pub combined_multiplier: f64,
    /// Mean base score per covered category.
    pub category_scores: BTreeMap<ComponentCategory, f64>,
    /// Synergy rules that applied to the selection.
    pub synergies: Vec<AppliedModifier>,
    /// Conflict rules that applied to the selection.
    pub conflicts: Vec<AppliedModifier>,
    /// Number of selected components.
    pub component_count: u32,
    /// Number of distinct categories covered by the selection.
    pub categories_covered: u32,
}

// ---------------------------------------------------------------------------
// Tax profile
// ---------------------------------------------------------------------------

/// Derived tax posture for a component selection applied to an economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TaxProfile {
    /// Share of assessed tax actually collected, 0-100.
    pub collection_efficiency: f64,
    /// Share of taxpayers complying voluntarily, 0-100.
    pub compliance_rate: f64,
    /// Effective rate per category after collection/compliance losses,
    /// as a fraction of the category base.
    pub effective_rates: BTreeMap<TaxCategory, f64>,
    /// Projected total revenue as a fraction of nominal GDP.
    pub projected_revenue_share: f64,
    /// Projected total revenue in simulation dollars.
    pub projected_revenue: f64,
}

// ---------------------------------------------------------------------------
// Stability report
// ---------------------------------------------------------------------------

/// Derived stability posture for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StabilityReport {
    /// Aggregate stability score, clamped to 0-100.
    pub score: f64,
    /// Risk band derived from the score.
    pub risk: RiskLevel,
    /// Weighted effectiveness contribution.
    pub effectiveness_term: f64,
    /// Weighted economic-tier contribution.
    pub economic_term: f64,
    /// Weighted legitimacy contribution.
    pub legitimacy_term: f64,
    /// Weighted cohesion contribution (conflict penalty).
    pub cohesion_term: f64,
}

// ---------------------------------------------------------------------------
// Intelligence advisories
// ---------------------------------------------------------------------------

/// A single advisory produced by the intelligence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct IntelligenceItem {
    /// Severity of the advisory.
    pub severity: Severity,
    /// What kind of advisory this is.
    pub kind: IntelligenceKind,
    /// Human-readable advisory text.
    pub message: String,
    /// Components the advisory refers to.
    pub components: Vec<ComponentType>,
    /// Projected change to the overall effectiveness score if the
    /// advisory is acted on, when quantifiable.
    pub projected_delta: Option<f64>,
}

// ---------------------------------------------------------------------------
// Unified atomic state
// ---------------------------------------------------------------------------

/// The complete derived state for a country's component selection.
///
/// Recomputed from scratch on every selection change; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AtomicState {
    /// Effectiveness breakdown.
    pub effectiveness: EffectivenessReport,
    /// Tax posture.
    pub tax: TaxProfile,
    /// Stability posture.
    pub stability: StabilityReport,
    /// Ranked advisories, most severe first.
    pub intelligence: Vec<IntelligenceItem>,
}

/// A state recomputation pushed to dashboard subscribers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AtomicStateUpdate {
    /// The country whose state changed.
    pub country_id: CountryId,
    /// Monotonically increasing revision number for this country.
    pub revision: u64,
    /// The component selection after the change, sorted.
    pub components: Vec<ComponentType>,
    /// The freshly derived state.
    pub state: AtomicState,
}
