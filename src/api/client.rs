use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::ApiConfig;
use crate::model::AccessToken;

/// Longest server error message kept in an `ApiError`.
const MAX_ERROR_MESSAGE_LEN: usize = 200;

/// HTTP client for the board API.
///
/// Keeps a cookie store so the long-lived refresh credential set by the
/// server at login is sent back on `/refresh` without the caller seeing it.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                config.base_path.trim_end_matches('/')
            ),
        })
    }

    /// Absolute URL for an API route such as `/questions/3`.
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base, route)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        route: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, ApiError> {
        let body = self
            .execute("GET", route, self.request(Method::GET, route, token))
            .await?;
        decode(route, &body)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        token: Option<&AccessToken>,
        payload: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, route, token).json(payload);
        let body = self.execute("POST", route, builder).await?;
        decode(route, &body)
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        route: &str,
        token: Option<&AccessToken>,
        payload: &B,
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, route, token).json(payload);
        self.execute("POST", route, builder).await?;
        Ok(())
    }

    /// POST without a request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        route: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, ApiError> {
        let body = self
            .execute("POST", route, self.request(Method::POST, route, token))
            .await?;
        decode(route, &body)
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        route: &str,
        token: Option<&AccessToken>,
        payload: &B,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, route, token).json(payload);
        let body = self.execute("PUT", route, builder).await?;
        decode(route, &body)
    }

    pub(crate) async fn delete(
        &self,
        route: &str,
        token: Option<&AccessToken>,
    ) -> Result<(), ApiError> {
        self.execute("DELETE", route, self.request(Method::DELETE, route, token))
            .await?;
        Ok(())
    }

    fn request(&self, method: Method, route: &str, token: Option<&AccessToken>) -> RequestBuilder {
        let mut builder = self.client.request(method, self.url(route));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.bearer_auth(token.expose());
        }
        builder
    }

    async fn execute(
        &self,
        method: &'static str,
        route: &str,
        builder: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(method, path = %route, "API request");

        let network = |source| ApiError::Network {
            method,
            path: route.to_string(),
            source,
        };

        let response = builder.send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        if !status.is_success() {
            let err = ApiError::from_status(status, error_message(&body));
            tracing::warn!(
                method,
                path = %route,
                status = status.as_u16(),
                error_type = err.error_type(),
                "API request failed"
            );
            return Err(err);
        }

        tracing::debug!(method, path = %route, status = status.as_u16(), "API response");
        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(route: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::Decode {
        path: route.to_string(),
        source,
    })
}

/// Pull a readable message out of an error body.
///
/// Prefers a JSON `message` or `error` string, falling back to the raw text.
fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }

    String::from_utf8_lossy(body)
        .chars()
        .take(MAX_ERROR_MESSAGE_LEN)
        .collect()
}
