//! Records exchanged with the board API and held in the stores.

mod article;
mod id;
mod session;

pub use article::{Article, Comment};
pub use id::ItemId;
pub use session::{AccessToken, Session};
