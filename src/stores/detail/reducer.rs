use crate::mvi::Reducer;
use crate::stores::detail::intent::ArticleDetailIntent;
use crate::stores::detail::state::ArticleDetailState;

pub struct ArticleDetailReducer;

impl Reducer for ArticleDetailReducer {
    type State = ArticleDetailState;
    type Intent = ArticleDetailIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticleDetailIntent::Loaded(article) => ArticleDetailState { article },
        }
    }
}
