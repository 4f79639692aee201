//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use todohub_api::AppState;
use todohub_auth::clock::ManualClock;
use todohub_core::config::{AppConfig, DatabaseConfig};
use todohub_database::{DatabasePool, TodoRepository, UserRepository};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for direct repository access
    pub state: AppState,
    /// Clock the token service reads; advance it to expire tokens
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application over a private in-memory database
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database = DatabaseConfig::in_memory();
        config.auth.token_secret = "integration-test-secret".to_string();

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        todohub_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let clock = Arc::new(ManualClock::default());
        let state = AppState::new(config, db, clock.clone()).expect("Failed to build app state");
        let router = todohub_api::build_app(state.clone());

        Self {
            router,
            state,
            clock,
        }
    }

    /// Register a user through the API
    pub async fn sign_up(&self, name: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/sign-up",
            Some(serde_json::json!({ "name": name, "password": password })),
            None,
        )
        .await
    }

    /// Call the login route with Basic credentials
    pub async fn login_raw(&self, name: &str, password: &str) -> TestResponse {
        let credentials = BASE64.encode(format!("{name}:{password}"));
        let req = Request::builder()
            .method("GET")
            .uri("/api/login")
            .header("Authorization", format!("Basic {credentials}"))
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Login and return the access token
    pub async fn login(&self, name: &str, password: &str) -> String {
        let response = self.login_raw(name, password).await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Register a user with a fixed password and return their token
    pub async fn sign_up_and_login(&self, name: &str) -> String {
        let response = self.sign_up(name, "password").await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        self.login(name, "password").await
    }

    /// User repository over the app's database
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.state.db.pool().clone())
    }

    /// Todo repository over the app's database
    pub fn todos(&self) -> TodoRepository {
        TodoRepository::new(self.state.db.pool().clone())
    }

    /// Look up a user's public id directly in the store
    pub async fn public_id_of(&self, name: &str) -> String {
        self.users()
            .find_by_name(name)
            .await
            .expect("Failed to query user")
            .expect("User does not exist")
            .public_id
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str, token).await
    }

    /// Make an HTTP request with a literal body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("x-access-token", token);
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the body, if any
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

pub const PERMISSION_DENIED: &str = "You don't have permission to perform that function!";
