use crate::model::Article;
use crate::mvi::State;

/// The article currently open in the detail view.
///
/// Starts as the all-empty placeholder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleDetailState {
    pub article: Article,
}

impl State for ArticleDetailState {}

impl ArticleDetailState {
    pub fn is_placeholder(&self) -> bool {
        self.article.id.is_empty()
    }
}
