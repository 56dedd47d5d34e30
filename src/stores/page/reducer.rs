use crate::mvi::Reducer;
use crate::stores::page::intent::PageIntent;
use crate::stores::page::state::PageState;

pub struct PageReducer;

impl Reducer for PageReducer {
    type State = PageState;
    type Intent = PageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PageIntent::Reset => PageState::default(),
            PageIntent::Increment => PageState {
                current: state.current.saturating_add(1),
            },
        }
    }
}
