//! Orchestration of the stores.
//!
//! `Board` is the only place where one store's state feeds another's
//! operation (current page and token into a fetch, a reset after a create)
//! and where failures are either returned to the caller or turned into a
//! user notice.
//!
//! | Operation | On failure |
//! |---|---|
//! | `fetch_articles`, `next_page`, `add_article` | returned only |
//! | everything else | notice + returned |
//! | `refresh` | returned only (silent) |

use std::sync::Arc;

use crate::api::{ApiClient, ApiError, NewArticle};
use crate::boundary::{Navigator, Notice, Notifier, Route};
use crate::model::{Article, Comment, ItemId, Session};
use crate::stores::articles::ArticlesStore;
use crate::stores::auth::{AuthStore, LoginFlag};
use crate::stores::comments::CommentsStore;
use crate::stores::detail::ArticleDetailStore;
use crate::stores::page::PageStore;

pub const MSG_GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const MSG_COMMENT_FAILURE: &str = "Something went wrong.";
pub const MSG_COMMENT_DELETED: &str = "The comment was deleted.";
pub const MSG_UPDATE_SUCCESS: &str = "The article was updated.";
pub const MSG_UPDATE_FAILURE: &str = "Something went wrong while updating the article.";
pub const MSG_DELETE_FAILURE: &str = "Something went wrong while deleting the article.";
pub const MSG_REGISTER_SUCCESS: &str = "Registration complete.";
/// Shown for both login and registration failures.
pub const MSG_AUTH_FAILURE: &str = "Something went wrong. Please try logging in again.";

/// All stores of the board client plus their UI collaborators.
pub struct Board {
    page: PageStore,
    articles: ArticlesStore,
    detail: ArticleDetailStore,
    comments: CommentsStore,
    auth: AuthStore,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl Board {
    pub fn new(
        api: ApiClient,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            page: PageStore::new(),
            articles: ArticlesStore::new(api.clone()),
            detail: ArticleDetailStore::new(api.clone()),
            comments: CommentsStore::new(api.clone()),
            auth: AuthStore::new(api),
            notifier,
            navigator,
        }
    }

    pub fn page(&self) -> &PageStore {
        &self.page
    }

    pub fn articles(&self) -> &ArticlesStore {
        &self.articles
    }

    pub fn detail(&self) -> &ArticleDetailStore {
        &self.detail
    }

    pub fn comments(&self) -> &CommentsStore {
        &self.comments
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn login_flag(&self) -> LoginFlag {
        self.auth.login_flag()
    }

    // --- Articles -------------------------------------------------------

    /// Load the current page into the listing.
    pub async fn fetch_articles(&self) -> Result<(), ApiError> {
        let page = self.page.current();
        let token = self.auth.token();
        self.articles.fetch(page, &token).await
    }

    /// Advance the page counter and load the new page.
    pub async fn next_page(&self) -> Result<(), ApiError> {
        let page = self.page.increment();
        let token = self.auth.token();
        self.articles.fetch(page, &token).await
    }

    /// Empty the listing and go back to the first page.
    pub fn reset_articles(&self) {
        self.articles.reset();
        self.page.reset();
    }

    /// Create an article, then reset the listing and reload the first page.
    ///
    /// The created article shows up once, in the position the server gives
    /// it. If the reload fails the listing stays empty at page 0.
    pub async fn add_article(
        &self,
        title: &str,
        description: &str,
        category_id: ItemId,
    ) -> Result<Article, ApiError> {
        let token = self.auth.token();
        let new_article = NewArticle {
            title: title.to_string(),
            description: description.to_string(),
            category_id,
        };
        let created = self.articles.add(&new_article, &token).await?;

        self.reset_articles();
        self.articles.fetch(0, &token).await?;
        Ok(created)
    }

    pub fn open_menu_popup(&self, id: ItemId) {
        self.articles.open_menu_popup(id);
    }

    pub fn close_menu_popup(&self) {
        self.articles.close_menu_popup();
    }

    pub fn open_edit_mode(&self, id: ItemId) {
        self.articles.open_edit_mode(id);
    }

    pub fn close_edit_mode(&self) {
        self.articles.close_edit_mode();
    }

    pub async fn update_article(&self, article: &Article) -> Result<Article, ApiError> {
        let token = self.auth.token();
        let result = self.articles.update(article, &token).await;
        self.report(&result, Some(MSG_UPDATE_SUCCESS), MSG_UPDATE_FAILURE);
        result
    }

    pub async fn delete_article(&self, id: &ItemId) -> Result<(), ApiError> {
        let token = self.auth.token();
        let result = self.articles.delete(id, &token).await;
        self.report(&result, None, MSG_DELETE_FAILURE);
        result
    }

    // --- Detail and comments -------------------------------------------

    pub async fn load_article(&self, id: &ItemId) -> Result<(), ApiError> {
        let token = self.auth.token();
        let result = self.detail.load(id, &token).await;
        self.report(&result, None, MSG_GENERIC_FAILURE);
        result
    }

    pub async fn fetch_comments(&self, article_id: &ItemId) -> Result<(), ApiError> {
        let token = self.auth.token();
        let result = self.comments.fetch(article_id, &token).await;
        self.report(&result, None, MSG_COMMENT_FAILURE);
        result
    }

    pub async fn add_comment(
        &self,
        article_id: &ItemId,
        description: &str,
    ) -> Result<Comment, ApiError> {
        let token = self.auth.token();
        let result = self.comments.add(article_id, description, &token).await;
        self.report(&result, None, MSG_COMMENT_FAILURE);
        result
    }

    pub async fn delete_comment(&self, id: &ItemId) -> Result<(), ApiError> {
        let token = self.auth.token();
        let result = self.comments.delete(id, &token).await;
        self.report(&result, Some(MSG_COMMENT_DELETED), MSG_COMMENT_FAILURE);
        result
    }

    // --- Auth -----------------------------------------------------------

    /// Sign in and go to the article listing.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let result = self.auth.login(email, password).await;
        self.report(&result, None, MSG_AUTH_FAILURE);
        if result.is_ok() {
            self.navigator.goto(Route::Articles);
        }
        result
    }

    /// Create an account and go to the login view.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<(), ApiError> {
        let result = self.auth.register(email, password, nickname).await;
        self.report(&result, Some(MSG_REGISTER_SUCCESS), MSG_AUTH_FAILURE);
        if result.is_ok() {
            self.navigator.goto(Route::Login);
        }
        result
    }

    /// Silently re-establish the session; no notice either way.
    pub async fn refresh(&self) -> Result<Session, ApiError> {
        self.auth.refresh().await
    }

    pub fn reset_user_info(&self) {
        self.auth.reset_user_info();
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.auth.logout().await
    }

    fn report<T>(&self, result: &Result<T, ApiError>, success: Option<&str>, failure: &str) {
        match result {
            Ok(_) => {
                if let Some(message) = success {
                    self.notifier.notify(Notice::success(message));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, error_type = err.error_type(), "Board operation failed");
                self.notifier.notify(Notice::failure(failure));
            }
        }
    }
}
