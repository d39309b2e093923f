//! Data layer for IxStats (`PostgreSQL` + Redis).
//!
//! `PostgreSQL` is the system of record: country records, component
//! selections, vault ledger entries, and notifications. Redis is the
//! read-side accelerator: cached dashboard snapshots with a TTL and the
//! rendered map tile cache, both invalidated on writes.
//!
//! ```text
//! Dashboard API
//!     |
//!     +-- Reads  --> Redis (CachePool), falling back to PostgreSQL
//!     |
//!     +-- Writes --> PostgreSQL (PostgresPool)
//!         |-- CountryStore        (country records)
//!         |-- SelectionStore      (component selections)
//!         |-- VaultStore          (append-only vault entries)
//!         +-- NotificationStore   (dashboard notifications)
//! ```
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`cache`] -- Redis snapshot cache and tile invalidation
//! - [`country_store`] -- Country record CRUD
//! - [`selection_store`] -- Transactional selection replacement
//! - [`vault_store`] -- Batch vault entry insertion and querying
//! - [`notification_store`] -- Notification insertion and listing
//! - [`codec`] -- Enum <-> TEXT conversions
//! - [`error`] -- Shared error types

pub mod cache;
pub mod codec;
pub mod country_store;
pub mod error;
pub mod notification_store;
pub mod postgres;
pub mod selection_store;
pub mod vault_store;

// Re-export primary types for convenience.
pub use cache::CachePool;
pub use country_store::{CountryRow, CountryStore};
pub use error::DbError;
pub use notification_store::{NotificationRow, NotificationStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use selection_store::SelectionStore;
pub use vault_store::{VaultRow, VaultStore};
