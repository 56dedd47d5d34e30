//! Request and response bodies as they appear on the wire.

use serde::{Deserialize, Serialize};

use crate::model::{Article, Comment, ItemId};

/// `{ data: T }` wrapper used by create/update responses.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// Response of `GET /questions?page={n}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleListResponse {
    pub data: ArticleListData,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleListData {
    #[serde(default)]
    pub content: Vec<Article>,
}

/// Response of `GET /questions/{id}`; some deployments wrap it in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ArticleDetailResponse {
    Wrapped { data: Article },
    Bare(Article),
}

impl ArticleDetailResponse {
    pub fn into_article(self) -> Article {
        match self {
            ArticleDetailResponse::Wrapped { data } => data,
            ArticleDetailResponse::Bare(article) => article,
        }
    }
}

/// Comments as served by the article detail route.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentListResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// One page of the article listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    pub content: Vec<Article>,
    pub total_pages: u32,
    pub total_elements: Option<u64>,
}

impl From<ArticleListResponse> for ArticlePage {
    fn from(resp: ArticleListResponse) -> Self {
        Self {
            content: resp.data.content,
            total_pages: resp.total_pages,
            total_elements: resp.total_elements,
        }
    }
}

/// Body of `POST /questions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub category_id: ItemId,
}

/// Body of `PUT /questions/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleUpdate<'a> {
    pub category_id: &'a ItemId,
    pub title: &'a str,
    pub description: &'a str,
}

/// Body of `POST /answers`.
#[derive(Debug, Serialize)]
pub(crate) struct NewComment<'a> {
    pub qid: &'a ItemId,
    pub description: &'a str,
}

/// Body of `POST /login`.
#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /join`.
#[derive(Serialize)]
pub(crate) struct Registration<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub nickname: &'a str,
}
