//! Dispatch store owning the home panel's shared view state.

use parking_lot::RwLock;
use tracing::debug;

use crate::bus::Bus;
use crate::event::{HomeEvent, StateChangedPayload};

use super::journal::{DispatchJournal, DispatchRecord};
use super::state::{HomeAction, HomeViewState};

struct StoreInner {
    state: HomeViewState,
    journal: DispatchJournal,
}

impl StoreInner {
    fn apply(&mut self, action: HomeAction) -> (DispatchRecord, HomeViewState) {
        self.state.apply(&action);
        self.state.revision += 1;
        let revision = self.state.revision;
        let record = self.journal.record(revision, action);
        (record, self.state.clone())
    }
}

/// Single writer for [`HomeViewState`].
///
/// All mutation goes through [`HomeStore::dispatch`] or its guarded
/// variant [`HomeStore::dispatch_if`]: the action is applied under the
/// write lock (lock order is dispatch order) and a
/// [`HomeEvent::StateChanged`] is published after. Every apply lands
/// in the journal. Dispatch is synchronous and infallible.
pub struct HomeStore {
    inner: RwLock<StoreInner>,
    bus: Bus,
}

impl HomeStore {
    pub fn new(bus: Bus, journal_capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                state: HomeViewState::default(),
                journal: DispatchJournal::new(journal_capacity),
            }),
            bus,
        }
    }

    /// Applies `action` and returns the resulting snapshot.
    pub fn dispatch(&self, action: HomeAction) -> HomeViewState {
        let (record, state) = self.inner.write().apply(action);
        self.publish_dispatch(record, state)
    }

    /// Applies `action` only if `check` still holds. The check runs
    /// under the write lock, so no other dispatch can land between the
    /// check and the apply. Returns `None` when the check fails and
    /// nothing was applied.
    pub fn dispatch_if(
        &self,
        check: impl FnOnce() -> bool,
        action: HomeAction,
    ) -> Option<HomeViewState> {
        let (record, state) = {
            let mut inner = self.inner.write();
            if !check() {
                return None;
            }
            inner.apply(action)
        };
        Some(self.publish_dispatch(record, state))
    }

    fn publish_dispatch(&self, record: DispatchRecord, state: HomeViewState) -> HomeViewState {
        debug!(revision = record.revision, action = ?record.action, "dispatched action");
        self.bus.publish(HomeEvent::StateChanged(StateChangedPayload {
            revision: record.revision,
            action: record.action,
            state: state.clone(),
        }));
        state
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> HomeViewState {
        self.inner.read().state.clone()
    }

    /// Retained dispatch records, oldest first.
    pub fn journal(&self) -> Vec<DispatchRecord> {
        self.inner.read().journal.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn store() -> HomeStore {
        HomeStore::new(Bus::default(), 16)
    }

    #[test]
    fn dispatch_applies_action_and_bumps_revision() {
        let store = store();
        let state = store.dispatch(HomeAction::SetLoading(true));
        assert!(state.loading);
        assert_eq!(state.revision, 1);
        let state = store.dispatch(HomeAction::SetLoading(false));
        assert!(!state.loading);
        assert_eq!(state.revision, 2);
    }

    #[test]
    fn dispatch_records_to_journal() {
        let store = store();
        store.dispatch(HomeAction::ShowFilterList(true));
        store.dispatch(HomeAction::ShowFilterList(false));
        let journal = store.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal[0].action, HomeAction::ShowFilterList(true));
        assert_eq!(journal[0].revision, 1);
        assert_eq!(journal[1].revision, 2);
    }

    #[test]
    fn dispatch_if_applies_action_when_check_holds() {
        let store = store();
        let state = store
            .dispatch_if(|| true, HomeAction::SetLoading(true))
            .expect("applied");
        assert!(state.loading);
        assert_eq!(state.revision, 1);
        assert_eq!(store.journal().len(), 1);
    }

    #[test]
    fn dispatch_if_skips_action_when_check_fails() {
        let bus = Bus::default();
        let store = HomeStore::new(bus.clone(), 16);
        let mut receiver = bus.subscribe();

        let result = store.dispatch_if(|| false, HomeAction::SetLoading(true));
        assert!(result.is_none());

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert_eq!(snapshot.revision, 0);
        assert!(store.journal().is_empty());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn dispatch_publishes_state_changed() {
        let bus = Bus::default();
        let store = HomeStore::new(bus.clone(), 16);
        let mut receiver = bus.subscribe();

        let products = vec![Product {
            id: "p-1".to_string(),
            name: "Shoe".to_string(),
            price: 50.0,
        }];
        store.dispatch(HomeAction::SetProducts(products.clone()));

        let event = receiver.recv().await.expect("receive");
        match event {
            HomeEvent::StateChanged(payload) => {
                assert_eq!(payload.revision, 1);
                assert_eq!(payload.action, HomeAction::SetProducts(products.clone()));
                assert_eq!(payload.state.products, products);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn snapshot_reflects_latest_dispatch() {
        let store = store();
        store.dispatch(HomeAction::ShowSearchBar(true));
        let snapshot = store.snapshot();
        assert!(snapshot.search_open);
        assert_eq!(snapshot.revision, 1);
    }
}
