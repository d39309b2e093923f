//! IxTime clock, configuration, and state orchestration for IxStats.
//!
//! # Modules
//!
//! - [`ixtime`] -- The in-fiction calendar and time-scaling clock with
//!   operator override controls.
//! - [`config`] -- Configuration loading from `ixstats-config.yaml` into
//!   strongly-typed structs with environment overrides.
//! - [`state`] -- [`AtomicStateManager`]: the observer-pattern
//!   orchestrator that recomputes derived state on every selection
//!   change and publishes updates to subscribers.
//!
//! [`AtomicStateManager`]: state::AtomicStateManager

pub mod config;
pub mod ixtime;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use ixtime::{IxClock, IxTimeError};
pub use state::{AtomicStateManager, StateError, MAX_COMPONENTS};
