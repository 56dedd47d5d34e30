//! Session identity and the login/registration/refresh flows.

mod intent;
mod reducer;
mod state;

pub use intent::{AuthIntent, RefreshIntent};
pub use reducer::{AuthReducer, RefreshReducer};
pub use state::{is_logged_in, AuthState, RefreshState};

use tokio::sync::watch;

use crate::api::{ApiClient, ApiError};
use crate::model::{AccessToken, Session};
use crate::mvi::{Derived, Store};

/// Read-only "is anyone signed in" flag.
pub type LoginFlag = Derived<AuthState, bool>;

pub struct AuthStore {
    store: Store<AuthReducer>,
    refresh: Store<RefreshReducer>,
    api: ApiClient,
}

impl AuthStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            store: Store::new(),
            refresh: Store::new(),
            api,
        }
    }

    pub fn get(&self) -> AuthState {
        self.store.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.store.subscribe()
    }

    /// Current bearer token; empty when signed out.
    pub fn token(&self) -> AccessToken {
        self.store.get().session.access_token
    }

    pub fn login_flag(&self) -> LoginFlag {
        Derived::new(self.store.subscribe(), is_logged_in)
    }

    pub fn is_refreshed(&self) -> bool {
        self.refresh.get().refreshed
    }

    pub fn subscribe_refresh(&self) -> watch::Receiver<RefreshState> {
        self.refresh.subscribe()
    }

    /// Sign in. On failure the current session is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let session = self.api.login(email, password).await?;
        tracing::info!(uid = %session.uid, "Logged in");
        self.store.dispatch(AuthIntent::SessionReplaced(session.clone()));
        self.refresh.dispatch(RefreshIntent::Succeeded);
        Ok(session)
    }

    /// Create an account. Does not sign in.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<(), ApiError> {
        self.api.register(email, password, nickname).await?;
        tracing::info!("Account registered");
        Ok(())
    }

    /// Re-establish the session from the refresh cookie.
    ///
    /// Any failure signs the user out and marks the refresh as failed.
    pub async fn refresh(&self) -> Result<Session, ApiError> {
        match self.api.refresh().await {
            Ok(session) => {
                tracing::debug!(uid = %session.uid, "Session refreshed");
                self.store.dispatch(AuthIntent::SessionReplaced(session.clone()));
                self.refresh.dispatch(RefreshIntent::Succeeded);
                Ok(session)
            }
            Err(err) => {
                tracing::debug!(error_type = err.error_type(), "Session refresh failed");
                self.reset_user_info();
                self.refresh.dispatch(RefreshIntent::Failed);
                Err(err)
            }
        }
    }

    pub fn reset_user_info(&self) {
        self.store.dispatch(AuthIntent::Reset);
    }

    // TODO: call the server's logout route and clear the local session once
    // the API exposes one; until then this intentionally changes nothing.
    pub async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
