//! Client for the board REST API (`/api/v1`).

mod client;
mod endpoints;
mod error;
mod wire;

pub use client::ApiClient;
pub use error::ApiError;
pub use wire::{ArticlePage, NewArticle};
