//! Typed routes of the board API.

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::wire::{
    ArticleDetailResponse, ArticleListResponse, ArticlePage, ArticleUpdate, CommentListResponse,
    Credentials, DataEnvelope, NewArticle, NewComment, Registration,
};
use crate::model::{AccessToken, Article, Comment, ItemId, Session};

impl ApiClient {
    /// `GET /questions?page={page}`
    pub async fn list_articles(
        &self,
        page: u32,
        token: Option<&AccessToken>,
    ) -> Result<ArticlePage, ApiError> {
        let resp: ArticleListResponse = self
            .get_json(&format!("/questions?page={}", page), token)
            .await?;
        Ok(resp.into())
    }

    /// `GET /questions/{id}`
    pub async fn get_article(
        &self,
        id: &ItemId,
        token: Option<&AccessToken>,
    ) -> Result<Article, ApiError> {
        let resp: ArticleDetailResponse = self.get_json(&format!("/questions/{}", id), token).await?;
        Ok(resp.into_article())
    }

    /// `POST /questions`
    pub async fn create_article(
        &self,
        article: &NewArticle,
        token: Option<&AccessToken>,
    ) -> Result<Article, ApiError> {
        let resp: DataEnvelope<Article> = self.post_json("/questions", token, article).await?;
        Ok(resp.data)
    }

    /// `PUT /questions/{id}` with the editable fields of `article`.
    pub async fn update_article(
        &self,
        article: &Article,
        token: Option<&AccessToken>,
    ) -> Result<Article, ApiError> {
        let body = ArticleUpdate {
            category_id: &article.category_id,
            title: &article.title,
            description: &article.description,
        };
        let resp: DataEnvelope<Article> = self
            .put_json(&format!("/questions/{}", article.id), token, &body)
            .await?;
        Ok(resp.data)
    }

    /// `DELETE /questions/{id}`
    pub async fn delete_article(
        &self,
        id: &ItemId,
        token: Option<&AccessToken>,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/questions/{}", id), token).await
    }

    /// Comments of an article.
    ///
    /// Served by the article detail route; there is no dedicated answers
    /// listing in the API.
    pub async fn list_comments(
        &self,
        article_id: &ItemId,
        token: Option<&AccessToken>,
    ) -> Result<Vec<Comment>, ApiError> {
        let resp: CommentListResponse = self
            .get_json(&format!("/questions/{}", article_id), token)
            .await?;
        Ok(resp.comments)
    }

    /// `POST /answers`
    pub async fn create_comment(
        &self,
        article_id: &ItemId,
        description: &str,
        token: Option<&AccessToken>,
    ) -> Result<Comment, ApiError> {
        let body = NewComment {
            qid: article_id,
            description,
        };
        let resp: DataEnvelope<Comment> = self.post_json("/answers", token, &body).await?;
        Ok(resp.data)
    }

    /// `DELETE /answers/{id}`
    pub async fn delete_comment(
        &self,
        id: &ItemId,
        token: Option<&AccessToken>,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/answers/{}", id), token).await
    }

    /// `POST /login`
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.post_json("/login", None, &Credentials { email, password })
            .await
    }

    /// `POST /join`
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<(), ApiError> {
        let body = Registration {
            email,
            password,
            nickname,
        };
        self.post_unit("/join", None, &body).await
    }

    /// `POST /refresh`, authenticated by the refresh cookie alone.
    pub async fn refresh(&self) -> Result<Session, ApiError> {
        self.post_empty("/refresh", None).await
    }
}
