use crate::model::Session;
use crate::mvi::State;

/// Session of the signed-in user; empty when signed out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub session: Session,
}

impl State for AuthState {}

/// Outcome of the last session refresh.
///
/// Views wait on this during startup before deciding what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshState {
    pub refreshed: bool,
}

impl State for RefreshState {}

/// Projection behind the login flag.
pub fn is_logged_in(state: &AuthState) -> bool {
    state.session.is_authenticated()
}
