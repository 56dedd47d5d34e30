use crate::model::Article;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticleDetailIntent {
    /// Replaces the whole record.
    Loaded(Article),
}

impl Intent for ArticleDetailIntent {}
