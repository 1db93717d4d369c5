// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated JSON transport for the scheduling API.
//!
//! Handles:
//! - Bearer credential attachment
//! - JSON request/response bodies (204 yields an empty result)
//! - Error body normalization into [`ApiError::Http`]
//! - Global sign-out on 401

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::navigation::Navigator;
use crate::state::SessionHandle;
use crate::storage::Credentials;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Low-level API client shared by all resource clients.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    login_path: String,
    session: SessionHandle,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client for the configured backend.
    pub fn new(config: &Config, session: SessionHandle, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            session,
            navigator,
        }
    }

    /// Credential handle this client attaches and invalidates.
    pub fn credentials(&self) -> &Credentials {
        self.session.credentials()
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }

    /// Send a request and decode the JSON response into `T`.
    ///
    /// 204 No Content (or an empty 2xx body) decodes `T` from JSON `null`,
    /// so `()` and `Option<_>` are the natural result types for such calls.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        tracing::debug!(method = %method, url = %url, "API request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.credentials().token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "API request failed");
            ApiError::Network(e.to_string())
        })?;

        self.check_response_json(response).await
    }

    /// Resolve an endpoint against the base URL. Absolute URLs pass through.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.base_url, endpoint)
        }
    }

    /// Tear down the session and send the user to the login page.
    pub fn invalidate_session(&self) {
        tracing::warn!("Session rejected by server, signing out");
        self.session.invalidate();
        self.navigator.navigate(&self.login_path);
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            // Unauthorized - drop the session no matter which call failed
            if status == StatusCode::UNAUTHORIZED {
                self.invalidate_session();
            }

            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response_body(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), error = %err, "API error response");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return decode_empty();
        }

        let body = response.text().await.map_err(ApiError::from)?;
        if body.trim().is_empty() {
            return decode_empty();
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("JSON parse error: {}", e)))
    }
}

fn decode_empty<T: DeserializeOwned>() -> Result<T> {
    serde_json::from_value(serde_json::Value::Null)
        .map_err(|e| ApiError::Decode(format!("Expected a response body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::LoggingNavigator;
    use crate::storage::MemoryCredentialStore;

    fn client(base: &str) -> ApiClient {
        let config = Config {
            api_base_url: base.to_string(),
            ..Config::test_default()
        };
        let creds = Credentials::new(Arc::new(MemoryCredentialStore::new()));
        ApiClient::new(&config, SessionHandle::new(creds), Arc::new(LoggingNavigator))
    }

    #[test]
    fn test_url_joins_relative_endpoints() {
        let client = client("https://schedule.example.com/");
        assert_eq!(
            client.url("/api/auth/me"),
            "https://schedule.example.com/api/auth/me"
        );
        assert_eq!(client.url("http://other.host/x"), "http://other.host/x");
    }

    #[test]
    fn test_decode_empty() {
        let unit: Result<()> = decode_empty();
        assert!(unit.is_ok());
        let opt: Result<Option<u32>> = decode_empty();
        assert_eq!(opt.unwrap(), None);
        let num: Result<u32> = decode_empty();
        assert!(matches!(num, Err(ApiError::Decode(_))));
    }
}
