use crate::api::ArticlePage;
use crate::model::{Article, ItemId};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ArticlesIntent {
    /// A listing page arrived from the server.
    PageLoaded { page: u32, articles: ArticlePage },
    /// Back to the empty listing.
    Reset,
    /// An article was created; it goes to the front.
    Created(Article),
    /// The server returned the edited article; replace it by id.
    Updated(Article),
    Deleted(ItemId),
    OpenMenuPopup(ItemId),
    CloseMenuPopup,
    /// Opening the edit form closes any open context menu.
    OpenEditMode(ItemId),
    CloseEditMode,
}

impl Intent for ArticlesIntent {}
