//! Dispatcher that owns the current state of one reducer.
//!
//! The state slot sits behind a mutex, so dispatches from several threads are
//! applied one at a time and none is lost. Subscribers run only when a
//! dispatch changed the state, in the order the changes were applied.
//!
//! Every change is stamped with a version under the state lock. Delivery
//! happens under a separate lock that remembers the last version delivered;
//! a change that lost the race to a newer one is skipped, so listeners never
//! see the state go backwards and always end on the latest state. Listeners
//! may read the store or subscribe, but must not dispatch: `delivered` is not
//! reentrant.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::mvi::Reducer;

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Versioned<S> {
    state: S,
    version: u64,
}

pub struct Store<R: Reducer> {
    state: Mutex<Versioned<R::State>>,
    /// Version of the last state handed to listeners.
    delivered: Mutex<u64>,
    listeners: RwLock<Vec<Listener<R::State>>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Mutex::new(Versioned {
                state: initial,
                version: 0,
            }),
            delivered: Mutex::new(0),
            listeners: RwLock::new(Vec::new()),
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.state.lock().state.clone()
    }

    /// Register a listener called with new states in the order they were
    /// applied. Under concurrent dispatch a state already superseded by a
    /// delivered one is skipped.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        self.listeners.write().push(Arc::new(listener));
    }

    /// Apply one action and return the resulting state.
    pub fn dispatch(&self, action: R::Action) -> R::State {
        tracing::debug!(?action, "dispatch");

        let (next, version) = {
            let mut slot = self.state.lock();
            let next = R::reduce(slot.state.clone(), action);
            if next == slot.state {
                tracing::debug!("dispatch left state unchanged");
                return next;
            }
            slot.version += 1;
            slot.state = next.clone();
            (next, slot.version)
        };

        let mut delivered = self.delivered.lock();
        if version < *delivered {
            tracing::debug!(version, delivered = *delivered, "skipping superseded notification");
            return next;
        }
        *delivered = version;

        // Clone the list so a listener may subscribe without deadlocking.
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener(&next);
        }

        next
    }

    /// Apply actions in order and return the final state.
    pub fn dispatch_all<I>(&self, actions: I) -> R::State
    where
        I: IntoIterator<Item = R::Action>,
    {
        let mut last = None;
        for action in actions {
            last = Some(self.dispatch(action));
        }
        last.unwrap_or_else(|| self.state())
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
