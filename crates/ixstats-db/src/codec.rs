//! Enum <-> database TEXT conversions.
//!
//! Enum columns are stored as TEXT holding the serde variant name, so the
//! database representation always matches the wire representation the
//! dashboard sees. The helpers here round-trip any unit-variant enum
//! through its serde string form.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DbError;

/// Serialize a unit-variant enum to its database TEXT form.
///
/// # Errors
///
/// Returns [`DbError::InvalidValue`] if the value does not serialize to
/// a plain string (i.e. it is not a unit variant).
pub fn enum_to_db<T: Serialize>(value: &T) -> Result<String, DbError> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(s) => Ok(s),
        other => Err(DbError::InvalidValue(format!(
            "expected string variant, got {other}"
        ))),
    }
}

/// Parse a database TEXT column back into a unit-variant enum.
///
/// # Errors
///
/// Returns [`DbError::InvalidValue`] if the text does not name a known
/// variant.
pub fn enum_from_db<T: DeserializeOwned>(text: &str) -> Result<T, DbError> {
    serde_json::from_value(serde_json::Value::String(text.to_owned()))
        .map_err(|e| DbError::InvalidValue(format!("unknown variant {text:?}: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ixstats_types::{ComponentType, EconomicTier, VaultEntryType};

    #[test]
    fn round_trips_component_types() {
        let text = enum_to_db(&ComponentType::RuleOfLaw).unwrap();
        assert_eq!(text, "RuleOfLaw");
        let back: ComponentType = enum_from_db(&text).unwrap();
        assert_eq!(back, ComponentType::RuleOfLaw);
    }

    #[test]
    fn round_trips_tiers_and_entry_types() {
        let text = enum_to_db(&EconomicTier::VeryStrong).unwrap();
        let back: EconomicTier = enum_from_db(&text).unwrap();
        assert_eq!(back, EconomicTier::VeryStrong);

        let text = enum_to_db(&VaultEntryType::Purchase).unwrap();
        let back: VaultEntryType = enum_from_db(&text).unwrap();
        assert_eq!(back, VaultEntryType::Purchase);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let result: Result<ComponentType, _> = enum_from_db("NotAComponent");
        assert!(matches!(result, Err(DbError::InvalidValue(_))));
    }
}
