// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process stub backend and helpers shared by the integration tests.

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use guild_scheduler::config::Config;
use guild_scheduler::models::User;
use guild_scheduler::navigation::Navigator;
use guild_scheduler::storage::{CredentialStore, MemoryCredentialStore};
use guild_scheduler::AppContext;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One request as seen by the stub backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Default)]
struct StubInner {
    responses: HashMap<(String, String), (u16, String)>,
    requests: Vec<RecordedRequest>,
}

/// HTTP server on 127.0.0.1 answering canned responses per (method, path).
///
/// Unconfigured routes answer 404 with a JSON error body.
#[derive(Clone)]
pub struct StubBackend {
    pub base_url: String,
    inner: Arc<Mutex<StubInner>>,
}

#[allow(dead_code)]
impl StubBackend {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(StubInner::default()));
        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            inner,
        }
    }

    /// Same recorder, but clients built from it target `base_url`.
    pub fn with_base_url(&self, base_url: String) -> Self {
        Self {
            base_url,
            inner: self.inner.clone(),
        }
    }

    pub fn respond(&self, method: &str, path: &str, status: u16, body: impl Into<String>) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .insert((method.to_string(), path.to_string()), (status, body.into()));
    }

    pub fn respond_json(&self, method: &str, path: &str, status: u16, body: serde_json::Value) {
        self.respond(method, path, status, body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn config(&self) -> Config {
        Config {
            api_base_url: self.base_url.clone(),
            ..Config::test_default()
        }
    }
}

async fn handle(
    State(inner): State<Arc<Mutex<StubInner>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header_str(header::AUTHORIZATION),
        content_type: header_str(header::CONTENT_TYPE),
        body,
    };

    let (status, body) = {
        let mut inner = inner.lock().unwrap();
        let key = (recorded.method.clone(), recorded.path.clone());
        let canned = inner
            .responses
            .get(&key)
            .cloned()
            .unwrap_or((404, r#"{"message":"Not found"}"#.to_string()));
        inner.requests.push(recorded);
        canned
    };

    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Navigator that remembers every redirect.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Context wired to the stub backend.
#[allow(dead_code)]
pub struct TestApp {
    pub ctx: AppContext,
    pub store: Arc<MemoryCredentialStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Build a context against `stub`, optionally with a persisted credential.
#[allow(dead_code)]
pub fn test_app(stub: &StubBackend, persisted_token: Option<&str>) -> TestApp {
    let store = Arc::new(match persisted_token {
        Some(token) => MemoryCredentialStore::with_token(token),
        None => MemoryCredentialStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::default());

    let ctx = AppContext::new(
        stub.config(),
        store.clone() as Arc<dyn CredentialStore>,
        navigator.clone() as Arc<dyn Navigator>,
    );

    TestApp {
        ctx,
        store,
        navigator,
    }
}

#[allow(dead_code)]
pub fn sample_user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-42",
        "email": "tank@example.com",
        "displayName": "Tank",
        "inGameNickname": "Shieldwall",
        "colorHex": "#aa3300"
    })
}

#[allow(dead_code)]
pub fn sample_user() -> User {
    serde_json::from_value(sample_user_json()).unwrap()
}
