use serde::Deserialize;

use super::id::ItemId;

/// Bearer credential for the board API.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building a request.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken(••••••••)")
    }
}

impl std::fmt::Display for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Identity of the signed-in user.
///
/// All fields empty means unauthenticated. The API sends the token under
/// the `Authorization` key; a body without it is not a session.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub uid: ItemId,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "Authorization", alias = "accessToken")]
    pub access_token: AccessToken,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_decodes_authorization_key() {
        let session: Session = serde_json::from_str(
            r#"{"uid": 5, "email": "a@b.c", "Authorization": "tok"}"#,
        )
        .unwrap();
        assert_eq!(session.uid, ItemId::Number(5));
        assert_eq!(session.access_token.expose(), "tok");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_session_accepts_access_token_alias() {
        let session: Session =
            serde_json::from_str(r#"{"uid": "u1", "email": "a@b.c", "accessToken": "tok"}"#)
                .unwrap();
        assert_eq!(session.access_token.expose(), "tok");
    }

    #[test]
    fn test_body_without_token_is_rejected() {
        assert!(serde_json::from_str::<Session>("{}").is_err());
        assert!(serde_json::from_str::<Session>(r#"{"uid": 1, "email": "a@b.c"}"#).is_err());
    }

    #[test]
    fn test_default_session_is_unauthenticated() {
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn test_token_is_redacted() {
        let token = AccessToken::new("secret-value");
        assert!(!format!("{:?}", token).contains("secret"));
        assert!(!token.to_string().contains("secret"));
    }
}
