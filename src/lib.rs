//! Client-side state for the Q&A board: article listing, article detail,
//! comments and the signed-in session, each kept in a subscribable store
//! synchronized with the board REST API.

pub mod api;
pub mod board;
pub mod boundary;
pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod stores;

pub use board::Board;
