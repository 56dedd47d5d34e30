//! Subscribable state container.

use tokio::sync::watch;

use super::reducer::Reducer;

/// A subscribable container whose only mutation path is its reducer.
///
/// Reads return a clone of the current value. Subscribers are woken only
/// when a dispatched intent actually changes the value.
pub struct Store<R: Reducer> {
    tx: watch::Sender<R::State>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the default state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding `state`.
    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Subscribe to changes.
    ///
    /// The returned receiver starts with the current value marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }

    /// Apply an intent through the reducer.
    ///
    /// Returns `true` if the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
