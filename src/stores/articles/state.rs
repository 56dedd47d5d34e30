use crate::model::{Article, ItemId};
use crate::mvi::State;

/// Paginated article listing plus the per-item UI selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticlesState {
    pub total_pages: u32,
    pub total_elements: u64,
    /// Server page order; first page replaces, later pages append.
    pub content: Vec<Article>,
    /// Article whose context menu is open.
    pub menu_popup_id: Option<ItemId>,
    /// Article whose edit form is open.
    pub edit_mode_id: Option<ItemId>,
}

impl State for ArticlesState {}

impl ArticlesState {
    pub fn find(&self, id: &ItemId) -> Option<&Article> {
        self.content.iter().find(|a| &a.id == id)
    }

    /// Whether `page` (zero-based) is the last one the server reported.
    ///
    /// Uses `total_pages`, not content length: a page past the end loads
    /// as an empty append.
    pub fn is_last_page(&self, page: u32) -> bool {
        page.saturating_add(1) >= self.total_pages
    }
}
