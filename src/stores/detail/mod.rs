//! Full record of a single article.

mod intent;
mod reducer;
mod state;

pub use intent::ArticleDetailIntent;
pub use reducer::ArticleDetailReducer;
pub use state::ArticleDetailState;

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError};
use crate::model::{AccessToken, ItemId};
use crate::mvi::Store;

pub struct ArticleDetailStore {
    store: Store<ArticleDetailReducer>,
    api: ApiClient,
}

impl ArticleDetailStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: Store::new(),
            api,
        }
    }

    pub fn get(&self) -> ArticleDetailState {
        self.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ArticleDetailState> {
        self.store.subscribe()
    }

    /// Fetch article `id` and replace the held record.
    ///
    /// On failure the previous record stays in place.
    pub async fn load(&self, id: &ItemId, token: &AccessToken) -> Result<(), ApiError> {
        let article = self.api.get_article(id, Some(token)).await?;
        tracing::debug!(id = %id, "Article detail loaded");
        self.store.dispatch(ArticleDetailIntent::Loaded(article));
        Ok(())
    }
}
