//! Model-View-Intent primitives for the client-side stores.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ Store ──→ Subscribers
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: value held by a store, cloned out on every read
//! - **Intent**: named mutation (user action or API response)
//! - **Reducer**: pure function that merges an intent into the state
//! - **Store**: subscribable container that applies reducers

mod derived;
mod intent;
mod reducer;
mod state;
mod store;

pub use derived::Derived;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
pub use store::Store;
