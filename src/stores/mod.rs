//! Client-side state containers synchronized with the board API.
//!
//! Each store owns one slice of state and exposes the network operations
//! that update it. Stores never call each other; cross-store effects are
//! sequenced by [`crate::board::Board`].

pub mod articles;
pub mod auth;
pub mod comments;
pub mod detail;
pub mod page;
