//! Integration tests for registration, login and the token gate.

mod helpers;

use chrono::Duration;
use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_sign_up_and_login() {
    let app = TestApp::new().await;

    let response = app.sign_up("alice", "wonderland").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "New user has been created!");

    let response = app.login_raw("alice", "wonderland").await;
    assert_eq!(response.status, StatusCode::CREATED);
    let token = response.body["token"].as_str().expect("token");

    let response = app.request("GET", "/api/todo", None, Some(token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({ "todos": [] }));
}

#[tokio::test]
async fn test_first_user_is_admin_second_is_not() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;
    let bob = app.sign_up_and_login("bob").await;

    let response = app.request("GET", "/api/user", None, Some(&alice)).await;
    let users = response.body["users"].as_array().expect("users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["name"], "alice");
    assert_eq!(users[0]["admin"], true);
    assert_eq!(users[1]["admin"], false);

    let response = app.request("GET", "/api/user", None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), helpers::PERMISSION_DENIED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sign_ups_produce_one_admin() {
    let app = TestApp::new().await;

    let sign_ups = (0..8).map(|i| {
        let app = &app;
        async move { app.sign_up(&format!("user{i}"), "password").await }
    });
    for response in futures::future::join_all(sign_ups).await {
        assert_eq!(response.status, StatusCode::OK);
    }

    let users = app.users().find_all().await.expect("list users");
    assert_eq!(users.len(), 8);
    assert_eq!(users.iter().filter(|u| u.admin).count(), 1);
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = TestApp::new().await;
    app.sign_up("alice", "one").await;

    let response = app.sign_up("alice", "two").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.message(), "User already exists!");

    app.login("alice", "one").await;
}

#[tokio::test]
async fn test_malformed_sign_up_bodies() {
    let app = TestApp::new().await;

    let response = app
        .request_raw("POST", "/api/sign-up", "{not json", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/sign-up",
            Some(serde_json::json!({ "name": "alice" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.sign_up(&"a".repeat(51), "password").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.sign_up("alice", "").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert!(app.users().find_all().await.expect("list").is_empty());
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = TestApp::new().await;
    app.sign_up("alice", "wonderland").await;

    for response in [
        app.login_raw("alice", "wrong").await,
        app.login_raw("nobody", "wonderland").await,
    ] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.message(), "Could not verify!");
        assert_eq!(
            response.headers.get("www-authenticate").expect("challenge"),
            "Basic realm=\"Login Required!\""
        );
    }
}

#[tokio::test]
async fn test_login_without_credentials() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/login", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Could not verify!");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/todo", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "No token found!");

    let response = app.request("GET", "/api/user", None, Some("")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "No token found!");
}

#[tokio::test]
async fn test_garbage_and_bearer_tokens_are_rejected() {
    let app = TestApp::new().await;
    let token = app.sign_up_and_login("alice").await;

    let response = app.request("GET", "/api/todo", None, Some("garbage")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid Token!");

    let response = app
        .send(
            http::Request::builder()
                .uri("/api/todo")
                .header("Authorization", format!("Bearer {token}"))
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "No token found!");
}

#[tokio::test]
async fn test_token_expires_after_thirty_minutes() {
    let app = TestApp::new().await;
    let token = app.sign_up_and_login("alice").await;

    app.clock.advance(Duration::minutes(29));
    let response = app.request("GET", "/api/todo", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    app.clock.advance(Duration::minutes(2));
    let response = app.request("GET", "/api/todo", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid Token!");

    let fresh = app.login("alice", "password").await;
    let response = app.request("GET", "/api/todo", None, Some(&fresh)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deleted_users_token_is_rejected() {
    let app = TestApp::new().await;
    let admin = app.sign_up_and_login("admin").await;
    let bob = app.sign_up_and_login("bob").await;
    let bob_id = app.public_id_of("bob").await;

    let response = app
        .request("DELETE", &format!("/api/user/{bob_id}"), None, Some(&admin))
        .await;
    assert_eq!(response.message(), "User has been deleted!");

    let response = app.request("GET", "/api/todo", None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid Token!");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert!(response.body["version"].is_string());
}
