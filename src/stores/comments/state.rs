use crate::model::Comment;
use crate::mvi::State;

/// Comments of the article in the detail view, in server order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommentsState {
    pub items: Vec<Comment>,
}

impl State for CommentsState {}
