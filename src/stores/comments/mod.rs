//! Comments of the article being viewed.

mod intent;
mod reducer;
mod state;

pub use intent::CommentsIntent;
pub use reducer::CommentsReducer;
pub use state::CommentsState;

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError};
use crate::model::{AccessToken, Comment, ItemId};
use crate::mvi::Store;

pub struct CommentsStore {
    store: Store<CommentsReducer>,
    api: ApiClient,
}

impl CommentsStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: Store::new(),
            api,
        }
    }

    pub fn get(&self) -> CommentsState {
        self.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<CommentsState> {
        self.store.subscribe()
    }

    /// Replace the list with the comments of `article_id`.
    pub async fn fetch(&self, article_id: &ItemId, token: &AccessToken) -> Result<(), ApiError> {
        let items = self.api.list_comments(article_id, Some(token)).await?;
        tracing::debug!(article_id = %article_id, count = items.len(), "Comments loaded");
        self.store.dispatch(CommentsIntent::Loaded(items));
        Ok(())
    }

    pub async fn add(
        &self,
        article_id: &ItemId,
        description: &str,
        token: &AccessToken,
    ) -> Result<Comment, ApiError> {
        let comment = self
            .api
            .create_comment(article_id, description, Some(token))
            .await?;
        tracing::info!(article_id = %article_id, id = %comment.id, "Comment added");
        self.store.dispatch(CommentsIntent::Added(comment.clone()));
        Ok(comment)
    }

    pub async fn delete(&self, id: &ItemId, token: &AccessToken) -> Result<(), ApiError> {
        self.api.delete_comment(id, Some(token)).await?;
        tracing::info!(id = %id, "Comment deleted");
        self.store.dispatch(CommentsIntent::Removed(id.clone()));
        Ok(())
    }
}
