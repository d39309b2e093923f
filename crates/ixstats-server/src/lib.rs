//! Dashboard API server (Axum HTTP + `WebSocket`) for IxStats.
//!
//! Serves the typed JSON API the dashboard frontend consumes: country
//! records, component selection mutations, derived effectiveness/tax/
//! stability/intelligence reports, the vault ledger, notifications, and
//! IxTime controls, plus a `WebSocket` stream of state recomputations.
//!
//! # Modules
//!
//! - [`state`] -- Shared [`AppState`](state::AppState) with the broadcast
//!   channel and in-memory dashboard state.
//! - [`handlers`] -- REST endpoint handlers.
//! - [`router`] -- Route table and middleware assembly.
//! - [`ws`] -- `WebSocket` update streaming.
//! - [`server`] -- Bind/serve lifecycle and background spawning.
//! - [`seed`] -- Demonstration seed countries.
//! - [`startup`] -- Binary startup sequence (config, stores, hydration).
//! - [`error`] -- [`ApiError`](error::ApiError) with HTTP mapping.

pub mod error;
pub mod handlers;
pub mod router;
pub mod seed;
pub mod server;
pub mod startup;
pub mod state;
pub mod ws;
