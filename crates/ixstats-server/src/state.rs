//! Shared application state for the dashboard API server.
//!
//! [`AppState`] holds the broadcast channel for state updates and the
//! in-memory dashboard state the REST endpoints serve. `PostgreSQL` and
//! Redis handles are optional: when absent the server runs entirely from
//! memory, which is also how the integration tests exercise it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use ixstats_core::{AtomicStateManager, IxClock};
use ixstats_db::{CachePool, PostgresPool};
use ixstats_ledger::Vault;
use ixstats_types::{AtomicStateUpdate, Country, CountryId, Notification};

/// Capacity of the broadcast channel for state updates.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// Maximum notifications retained in memory (newest first).
const MAX_NOTIFICATIONS: usize = 500;

/// Everything the dashboard knows about one country.
#[derive(Debug)]
pub struct CountryEntry {
    /// The persisted country record.
    pub country: Country,
    /// The orchestrator for the country's component selection.
    pub manager: AtomicStateManager,
    /// The country's credits vault.
    pub vault: Vault,
}

/// In-memory dashboard state served by the REST endpoints.
#[derive(Debug)]
pub struct DashboardState {
    /// Country entries keyed by country ID.
    pub countries: BTreeMap<CountryId, CountryEntry>,
    /// Notification feed (newest first, capped for memory).
    pub notifications: Vec<Notification>,
    /// The IxTime clock.
    pub clock: IxClock,
}

impl DashboardState {
    /// Create an empty dashboard state with the given clock.
    pub const fn new(clock: IxClock) -> Self {
        Self {
            countries: BTreeMap::new(),
            notifications: Vec::new(),
            clock,
        }
    }

    /// Insert a country entry, replacing any previous entry for the ID.
    pub fn insert_country(&mut self, entry: CountryEntry) {
        self.countries.insert(entry.country.id, entry);
    }

    /// Push a notification to the front of the feed, trimming the tail.
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.truncate(MAX_NOTIFICATIONS);
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(IxClock::default())
    }
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// broadcast sender pushes state updates to all connected `WebSocket`
/// clients; the dashboard is a read-write lock protecting the in-memory
/// state.
#[derive(Clone)]
pub struct AppState {
    /// Broadcast sender for state update messages.
    pub tx: broadcast::Sender<AtomicStateUpdate>,
    /// The current dashboard state.
    pub dashboard: Arc<RwLock<DashboardState>>,
    /// `PostgreSQL` handle, when persistence is configured.
    pub db: Option<PostgresPool>,
    /// Redis handle, when the cache is configured.
    pub cache: Option<CachePool>,
}

impl AppState {
    /// Create a new application state with an empty dashboard.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            dashboard: Arc::new(RwLock::new(DashboardState::default())),
            db: None,
            cache: None,
        }
    }

    /// Create a state with an explicit clock (custom multiplier).
    pub fn with_clock(clock: IxClock) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            dashboard: Arc::new(RwLock::new(DashboardState::new(clock))),
            db: None,
            cache: None,
        }
    }

    /// Attach a `PostgreSQL` handle.
    #[must_use]
    pub fn with_db(mut self, db: PostgresPool) -> Self {
        self.db = Some(db);
        self
    }

    /// Attach a Redis handle.
    #[must_use]
    pub fn with_cache(mut self, cache: CachePool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Subscribe to the state update broadcast channel.
    ///
    /// Returns a receiver that will yield an [`AtomicStateUpdate`] for
    /// every recomputation any handler publishes.
    pub fn subscribe(&self) -> broadcast::Receiver<AtomicStateUpdate> {
        self.tx.subscribe()
    }

    /// Publish a state update to all connected clients.
    ///
    /// Returns the number of receivers that received the message.
    /// Returns 0 if no clients are connected (this is not an error).
    pub fn broadcast(&self, update: AtomicStateUpdate) -> usize {
        // send returns Err only when there are zero receivers, which is
        // normal when no WebSocket clients are connected.
        self.tx.send(update).unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
