//! Collaborators the stores report to: user alerts and navigation.

/// Client-side views the auth flows navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Articles,
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Articles => "/articles",
            Route::Login => "/login",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// A human-readable message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }
}

/// Shows notices to the user (alert, toast, stdout, ...).
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn goto(&self, route: Route);
}
