//! Shared type definitions for the IxStats simulation.
//!
//! This crate is the single source of truth for all types used across the
//! IxStats workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (components, tiers, tax, vault, advisories)
//! - [`structs`] -- Core entity and report structs (country, vault, state)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ComponentCategory, ComponentType, EconomicTier, IntelligenceKind, PopulationTier, RiskLevel,
    Severity, TaxCategory, VaultEntryType,
};
pub use ids::{CountryId, NotificationId, UserId, VaultEntryId};
pub use structs::{
    AppliedModifier, AtomicState, AtomicStateUpdate, Country, EffectivenessReport,
    IntelligenceItem, Notification, StabilityReport, TaxProfile, VaultEntry,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::CountryId::export_all();
        let _ = crate::ids::UserId::export_all();
        let _ = crate::ids::VaultEntryId::export_all();
        let _ = crate::ids::NotificationId::export_all();

        // Enums
        let _ = crate::enums::ComponentCategory::export_all();
        let _ = crate::enums::ComponentType::export_all();
        let _ = crate::enums::EconomicTier::export_all();
        let _ = crate::enums::PopulationTier::export_all();
        let _ = crate::enums::TaxCategory::export_all();
        let _ = crate::enums::VaultEntryType::export_all();
        let _ = crate::enums::Severity::export_all();
        let _ = crate::enums::RiskLevel::export_all();
        let _ = crate::enums::IntelligenceKind::export_all();

        // Structs
        let _ = crate::structs::Country::export_all();
        let _ = crate::structs::VaultEntry::export_all();
        let _ = crate::structs::Notification::export_all();
        let _ = crate::structs::AppliedModifier::export_all();
        let _ = crate::structs::EffectivenessReport::export_all();
        let _ = crate::structs::TaxProfile::export_all();
        let _ = crate::structs::StabilityReport::export_all();
        let _ = crate::structs::IntelligenceItem::export_all();
        let _ = crate::structs::AtomicState::export_all();
        let _ = crate::structs::AtomicStateUpdate::export_all();
    }
}
