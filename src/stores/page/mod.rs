//! Current page of the article listing.

mod intent;
mod reducer;
mod state;

pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use state::PageState;

use tokio::sync::watch;

use crate::mvi::Store;

/// Zero-based page index of the article listing.
#[derive(Default)]
pub struct PageStore {
    store: Store<PageReducer>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.store.get().current
    }

    pub fn subscribe(&self) -> watch::Receiver<PageState> {
        self.store.subscribe()
    }

    pub fn reset(&self) {
        self.store.dispatch(PageIntent::Reset);
    }

    /// Advance one page and return the new index.
    ///
    /// The index is read back in the same synchronous step as the
    /// increment, so concurrent callers each get a distinct page.
    pub fn increment(&self) -> u32 {
        self.store.dispatch(PageIntent::Increment);
        self.current()
    }
}
