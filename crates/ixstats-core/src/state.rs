//! The unified atomic state manager.
//!
//! [`AtomicStateManager`] holds a country's component selection and
//! economic inputs, recomputes the full derived [`AtomicState`] on every
//! mutation, and publishes each recomputation on a broadcast channel.
//! Subscribers (the dashboard `WebSocket` layer, cache invalidation)
//! receive every update; a subscriber that falls behind skips ahead to
//! the newest message (broadcast semantics).

use std::collections::BTreeSet;

use tokio::sync::broadcast;
use tracing::debug;

use ixstats_types::{AtomicState, AtomicStateUpdate, ComponentType, CountryId, EconomicTier};

/// Capacity of the broadcast channel for state updates.
const BROADCAST_CAPACITY: usize = 256;

/// Maximum number of components a single government may select.
pub const MAX_COMPONENTS: usize = 12;

/// Errors that can occur when mutating a component selection.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The selection is already at [`MAX_COMPONENTS`].
    #[error("selection is full: at most {MAX_COMPONENTS} components")]
    SelectionFull,

    /// The component to remove is not in the selection.
    #[error("component {component:?} is not selected")]
    NotSelected {
        /// The component that was not found.
        component: ComponentType,
    },
}

/// Observer-pattern orchestrator for a single country's atomic state.
///
/// Every mutation recomputes the derived state from scratch (the engine
/// is pure table arithmetic, so recomputation is cheap) and bumps a
/// monotonically increasing revision number.
#[derive(Debug)]
pub struct AtomicStateManager {
    /// The country this manager belongs to.
    country_id: CountryId,
    /// Nominal GDP used by the tax assessment.
    gdp: f64,
    /// Economic tier used by the stability fold.
    tier: EconomicTier,
    /// The current component selection.
    selection: BTreeSet<ComponentType>,
    /// Revision counter, bumped on every recomputation.
    revision: u64,
    /// The current derived state.
    state: AtomicState,
    /// Broadcast sender for state updates.
    tx: broadcast::Sender<AtomicStateUpdate>,
}

impl AtomicStateManager {
    /// Create a manager with an empty selection for the given economy.
    pub fn new(country_id: CountryId, gdp: f64, tier: EconomicTier) -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        let selection = BTreeSet::new();
        let state = ixstats_engine::derive_state(&selection, gdp, tier);
        Self {
            country_id,
            gdp,
            tier,
            selection,
            revision: 0,
            state,
            tx,
        }
    }

    /// The country this manager orchestrates.
    pub const fn country_id(&self) -> CountryId {
        self.country_id
    }

    /// The current component selection.
    pub const fn selection(&self) -> &BTreeSet<ComponentType> {
        &self.selection
    }

    /// The current derived state.
    pub const fn state(&self) -> &AtomicState {
        &self.state
    }

    /// The current revision number.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to state updates.
    ///
    /// Returns a receiver that yields an [`AtomicStateUpdate`] for every
    /// recomputation published after the call.
    pub fn subscribe(&self) -> broadcast::Receiver<AtomicStateUpdate> {
        self.tx.subscribe()
    }

    /// Add a component to the selection.
    ///
    /// Adding an already-selected component is a no-op that returns
    /// `Ok(false)` without recomputing.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::SelectionFull`] if the selection is at
    /// capacity.
    pub fn add_component(&mut self, component: ComponentType) -> Result<bool, StateError> {
        if self.selection.contains(&component) {
            return Ok(false);
        }
        if self.selection.len() >= MAX_COMPONENTS {
            return Err(StateError::SelectionFull);
        }
        self.selection.insert(component);
        self.recompute();
        Ok(true)
    }

    /// Remove a component from the selection.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotSelected`] if the component is not in
    /// the selection.
    pub fn remove_component(&mut self, component: ComponentType) -> Result<(), StateError> {
        if !self.selection.remove(&component) {
            return Err(StateError::NotSelected { component });
        }
        self.recompute();
        Ok(())
    }

    /// Replace the entire selection.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::SelectionFull`] if the new selection exceeds
    /// capacity. The existing selection is left untouched on error.
    pub fn set_components(&mut self, selection: BTreeSet<ComponentType>) -> Result<(), StateError> {
        if selection.len() > MAX_COMPONENTS {
            return Err(StateError::SelectionFull);
        }
        if selection == self.selection {
            return Ok(());
        }
        self.selection = selection;
        self.recompute();
        Ok(())
    }

    /// Update the economic inputs (GDP and tier) and recompute.
    pub fn set_economy(&mut self, gdp: f64, tier: EconomicTier) {
        self.gdp = gdp;
        self.tier = tier;
        self.recompute();
    }

    /// Recompute the derived state, bump the revision, and publish.
    fn recompute(&mut self) {
        self.revision = self.revision.saturating_add(1);
        self.state = ixstats_engine::derive_state(&self.selection, self.gdp, self.tier);

        let update = AtomicStateUpdate {
            country_id: self.country_id,
            revision: self.revision,
            components: self.selection.iter().copied().collect(),
            state: self.state.clone(),
        };

        // send returns Err only when there are zero receivers, which is
        // normal when no subscriber is attached.
        let receivers = self.tx.send(update).unwrap_or(0);
        debug!(
            country = %self.country_id,
            revision = self.revision,
            receivers,
            overall = self.state.effectiveness.overall,
            "Atomic state recomputed"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn manager() -> AtomicStateManager {
        AtomicStateManager::new(CountryId::new(), 1.5e12, EconomicTier::Strong)
    }

    #[test]
    fn new_manager_starts_empty_at_revision_zero() {
        let mgr = manager();
        assert!(mgr.selection().is_empty());
        assert_eq!(mgr.revision(), 0);
        assert_eq!(mgr.state().effectiveness.overall, 0.0);
    }

    #[test]
    fn add_recomputes_and_bumps_revision() {
        let mut mgr = manager();
        assert!(mgr.add_component(ComponentType::RuleOfLaw).unwrap());
        assert_eq!(mgr.revision(), 1);
        assert_eq!(mgr.state().effectiveness.overall, 90.0);
    }

    #[test]
    fn duplicate_add_is_a_cheap_no_op() {
        let mut mgr = manager();
        assert!(mgr.add_component(ComponentType::RuleOfLaw).unwrap());
        assert!(!mgr.add_component(ComponentType::RuleOfLaw).unwrap());
        // The no-op must not bump the revision.
        assert_eq!(mgr.revision(), 1);
    }

    #[test]
    fn removal_of_absent_component_is_an_error() {
        let mut mgr = manager();
        let result = mgr.remove_component(ComponentType::FederalSystem);
        assert!(matches!(
            result,
            Err(StateError::NotSelected {
                component: ComponentType::FederalSystem
            })
        ));
        assert_eq!(mgr.revision(), 0);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut mgr = manager();
        for component in ixstats_engine::catalog::ALL_COMPONENTS.into_iter().take(MAX_COMPONENTS) {
            assert!(mgr.add_component(component).unwrap());
        }
        let overflow = mgr.add_component(ComponentType::MilitaryEnforcement);
        assert!(matches!(overflow, Err(StateError::SelectionFull)));
    }

    #[test]
    fn set_components_replaces_wholesale() {
        let mut mgr = manager();
        mgr.add_component(ComponentType::RuleOfLaw).unwrap();

        let replacement: BTreeSet<ComponentType> = [
            ComponentType::TechnocraticProcess,
            ComponentType::TechnocraticAgencies,
        ]
        .into_iter()
        .collect();
        mgr.set_components(replacement.clone()).unwrap();

        assert_eq!(mgr.selection(), &replacement);
        assert_eq!(mgr.state().effectiveness.component_count, 2);
    }

    #[test]
    fn identical_set_components_does_not_republish() {
        let mut mgr = manager();
        mgr.add_component(ComponentType::RuleOfLaw).unwrap();
        let revision = mgr.revision();
        mgr.set_components(mgr.selection().clone()).unwrap();
        assert_eq!(mgr.revision(), revision);
    }

    #[tokio::test]
    async fn subscribers_receive_updates() {
        let mut mgr = manager();
        let mut rx = mgr.subscribe();

        mgr.add_component(ComponentType::RuleOfLaw).unwrap();
        mgr.add_component(ComponentType::IndependentJudiciary).unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.revision, 1);
        assert_eq!(first.components, vec![ComponentType::RuleOfLaw]);

        let second = rx.recv().await.unwrap();
        assert_eq!(second.revision, 2);
        assert_eq!(second.state.effectiveness.synergies.len(), 1);
    }

    #[test]
    fn economy_changes_flow_into_tax_and_stability() {
        let mut mgr = manager();
        mgr.add_component(ComponentType::RuleOfLaw).unwrap();
        let revenue_before = mgr.state().tax.projected_revenue;

        mgr.set_economy(3.0e12, EconomicTier::Extravagant);
        assert!(mgr.state().tax.projected_revenue > revenue_before);
        assert_eq!(mgr.revision(), 2);
    }
}
