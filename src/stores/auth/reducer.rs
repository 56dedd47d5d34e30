use crate::mvi::Reducer;
use crate::stores::auth::intent::{AuthIntent, RefreshIntent};
use crate::stores::auth::state::{AuthState, RefreshState};

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::SessionReplaced(session) => AuthState { session },
            AuthIntent::Reset => AuthState::default(),
        }
    }
}

pub struct RefreshReducer;

impl Reducer for RefreshReducer {
    type State = RefreshState;
    type Intent = RefreshIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        RefreshState {
            refreshed: intent == RefreshIntent::Succeeded,
        }
    }
}
