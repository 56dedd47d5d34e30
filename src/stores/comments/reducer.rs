use crate::mvi::Reducer;
use crate::stores::comments::intent::CommentsIntent;
use crate::stores::comments::state::CommentsState;

pub struct CommentsReducer;

impl Reducer for CommentsReducer {
    type State = CommentsState;
    type Intent = CommentsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CommentsIntent::Loaded(items) => CommentsState { items },
            CommentsIntent::Added(comment) => {
                state.items.push(comment);
                state
            }
            CommentsIntent::Removed(id) => {
                state.items.retain(|c| c.id != id);
                state
            }
        }
    }
}
