use crate::mvi::Reducer;
use crate::stores::articles::intent::ArticlesIntent;
use crate::stores::articles::state::ArticlesState;

pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ArticlesState;
    type Intent = ArticlesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesIntent::PageLoaded { page, articles } => {
                if page == 0 {
                    state.content = articles.content;
                } else {
                    state.content.extend(articles.content);
                }
                state.total_pages = articles.total_pages;
                if let Some(total) = articles.total_elements {
                    state.total_elements = total;
                }
                state
            }
            ArticlesIntent::Reset => ArticlesState::default(),
            ArticlesIntent::Created(article) => {
                state.content.insert(0, article);
                state
            }
            ArticlesIntent::Updated(article) => {
                if let Some(slot) = state.content.iter_mut().find(|a| a.id == article.id) {
                    *slot = article;
                }
                state.edit_mode_id = None;
                state
            }
            ArticlesIntent::Deleted(id) => {
                state.content.retain(|a| a.id != id);
                state
            }
            ArticlesIntent::OpenMenuPopup(id) => {
                state.menu_popup_id = Some(id);
                state
            }
            ArticlesIntent::CloseMenuPopup => {
                state.menu_popup_id = None;
                state
            }
            ArticlesIntent::OpenEditMode(id) => {
                state.menu_popup_id = None;
                state.edit_mode_id = Some(id);
                state
            }
            ArticlesIntent::CloseEditMode => {
                state.edit_mode_id = None;
                state
            }
        }
    }
}
