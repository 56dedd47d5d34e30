//! Paginated article listing.

mod intent;
mod reducer;
mod state;

pub use intent::ArticlesIntent;
pub use reducer::ArticlesReducer;
pub use state::ArticlesState;

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError, NewArticle};
use crate::model::{AccessToken, Article, ItemId};
use crate::mvi::Store;

/// Article listing with create, update and delete against the API.
///
/// Operations take the page and token they act on as arguments; reading
/// those from other stores is the caller's job.
pub struct ArticlesStore {
    store: Store<ArticlesReducer>,
    api: ApiClient,
}

impl ArticlesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: Store::new(),
            api,
        }
    }

    pub fn get(&self) -> ArticlesState {
        self.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<ArticlesState> {
        self.store.subscribe()
    }

    /// Load `page` and merge it: page 0 replaces, later pages append.
    pub async fn fetch(&self, page: u32, token: &AccessToken) -> Result<(), ApiError> {
        let articles = self.api.list_articles(page, Some(token)).await?;
        tracing::debug!(
            page,
            count = articles.content.len(),
            total_pages = articles.total_pages,
            "Articles page loaded"
        );
        self.store.dispatch(ArticlesIntent::PageLoaded { page, articles });
        Ok(())
    }

    pub fn reset(&self) {
        self.store.dispatch(ArticlesIntent::Reset);
    }

    /// Create an article and put it at the front of the listing.
    pub async fn add(&self, article: &NewArticle, token: &AccessToken) -> Result<Article, ApiError> {
        let created = self.api.create_article(article, Some(token)).await?;
        tracing::info!(id = %created.id, "Article created");
        self.store.dispatch(ArticlesIntent::Created(created.clone()));
        Ok(created)
    }

    pub fn open_menu_popup(&self, id: ItemId) {
        self.store.dispatch(ArticlesIntent::OpenMenuPopup(id));
    }

    pub fn close_menu_popup(&self) {
        self.store.dispatch(ArticlesIntent::CloseMenuPopup);
    }

    pub fn open_edit_mode(&self, id: ItemId) {
        self.store.dispatch(ArticlesIntent::OpenEditMode(id));
    }

    pub fn close_edit_mode(&self) {
        self.store.dispatch(ArticlesIntent::CloseEditMode);
    }

    /// Save the editable fields of `article` and swap in the server's copy.
    pub async fn update(&self, article: &Article, token: &AccessToken) -> Result<Article, ApiError> {
        let updated = self.api.update_article(article, Some(token)).await?;
        tracing::info!(id = %updated.id, "Article updated");
        self.store.dispatch(ArticlesIntent::Updated(updated.clone()));
        Ok(updated)
    }

    pub async fn delete(&self, id: &ItemId, token: &AccessToken) -> Result<(), ApiError> {
        self.api.delete_article(id, Some(token)).await?;
        tracing::info!(id = %id, "Article deleted");
        self.store.dispatch(ArticlesIntent::Deleted(id.clone()));
        Ok(())
    }
}
