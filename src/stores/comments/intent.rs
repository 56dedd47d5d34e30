use crate::model::{Comment, ItemId};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CommentsIntent {
    Loaded(Vec<Comment>),
    /// Goes to the tail of the list.
    Added(Comment),
    Removed(ItemId),
}

impl Intent for CommentsIntent {}
