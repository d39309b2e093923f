//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in IxStats has a strongly-typed ID to prevent accidental
//! mixing of identifiers at compile time. All IDs use UUID v7
//! (time-ordered) for efficient database indexing.
//!
//! `PostgreSQL` generates UUIDs via native `DEFAULT uuidv7()` for inserts.
//! The `new()` constructors here exist for cases where app-side generation
//! is needed (e.g. tests, seed data).

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a simulated country.
    CountryId
}

define_id! {
    /// Unique identifier for a dashboard user.
    UserId
}

define_id! {
    /// Unique identifier for a vault ledger entry (credits transaction).
    VaultEntryId
}

define_id! {
    /// Unique identifier for a dashboard notification.
    NotificationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let country = CountryId::new();
        let user = UserId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(country.into_inner(), Uuid::nil());
        assert_ne!(user.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let id = VaultEntryId::new();
        let raw: Uuid = id.into();
        assert_eq!(VaultEntryId::from(raw), id);
    }

    #[test]
    fn id_serializes_as_plain_uuid() {
        let id = NotificationId::new();
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", id.into_inner()));
    }
}
