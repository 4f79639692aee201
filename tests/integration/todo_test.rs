//! Integration tests for todo ownership and the todo routes.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PERMISSION_DENIED, TestApp};

async fn create_todo(app: &TestApp, token: &str, item: &str) {
    let response = app
        .request("POST", "/api/todo", Some(json!({ "item": item })), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "New todo created!");
}

#[tokio::test]
async fn test_alice_and_bob_end_to_end() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;
    let bob = app.sign_up_and_login("bob").await;

    create_todo(&app, &alice, "buy milk").await;
    create_todo(&app, &bob, "walk dog").await;
    create_todo(&app, &alice, "pay rent").await;

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    let todos = response.body["todos"].as_array().expect("todos").clone();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["item"], "buy milk");
    assert_eq!(todos[1]["item"], "pay rent");
    assert!(todos[0]["id"].as_i64() < todos[1]["id"].as_i64());
    let milk_id = todos[0]["id"].as_i64().expect("id");

    let response = app.request("GET", "/api/todo", None, Some(&bob)).await;
    let bob_todos = response.body["todos"].as_array().expect("todos");
    assert_eq!(bob_todos.len(), 1);
    assert_eq!(bob_todos[0]["item"], "walk dog");

    // Bob cannot touch Alice's todo
    let path = format!("/api/todo/{milk_id}");
    for method in ["GET", "PUT", "DELETE"] {
        let response = app.request(method, &path, None, Some(&bob)).await;
        assert_eq!(response.status, StatusCode::OK, "{method}");
        assert_eq!(response.message(), PERMISSION_DENIED, "{method}");
    }

    let response = app.request("PUT", &path, None, Some(&alice)).await;
    assert_eq!(response.message(), "Todo item has been updated as complete!");

    let response = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(
        response.body,
        json!({ "todo": [{ "id": milk_id, "item": "buy milk", "complete": true }] })
    );

    let response = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(response.message(), "Todo item deleted!");

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    assert_eq!(response.body["todos"].as_array().expect("todos").len(), 1);
}

#[tokio::test]
async fn test_admin_cannot_read_other_users_todos() {
    let app = TestApp::new().await;
    let admin = app.sign_up_and_login("admin").await;
    let alice = app.sign_up_and_login("alice").await;
    create_todo(&app, &alice, "secret").await;

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    let id = response.body["todos"][0]["id"].as_i64().expect("id");

    let response = app
        .request("GET", &format!("/api/todo/{id}"), None, Some(&admin))
        .await;
    assert_eq!(response.message(), PERMISSION_DENIED);

    let response = app.request("GET", "/api/todo", None, Some(&admin)).await;
    assert_eq!(response.body, json!({ "todos": [] }));
}

#[tokio::test]
async fn test_double_delete_is_soft_not_found() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;
    create_todo(&app, &alice, "once").await;

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    let id = response.body["todos"][0]["id"].as_i64().expect("id");
    let path = format!("/api/todo/{id}");

    let first = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.message(), "Todo item deleted!");

    let second = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.message(), "Todo does not exist!");
}

#[tokio::test]
async fn test_missing_todo_is_reported_before_ownership() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;

    for path in ["/api/todo/4242", "/api/todo/not-a-number"] {
        for method in ["GET", "PUT", "DELETE"] {
            let response = app.request(method, path, None, Some(&alice)).await;
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(response.message(), "Todo does not exist!");
        }
    }
}

#[tokio::test]
async fn test_complete_twice_stays_complete() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;
    create_todo(&app, &alice, "laundry").await;

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    let id = response.body["todos"][0]["id"].as_i64().expect("id");
    let path = format!("/api/todo/{id}");

    for _ in 0..2 {
        let response = app.request("PUT", &path, None, Some(&alice)).await;
        assert_eq!(response.message(), "Todo item has been updated as complete!");
    }

    let response = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(response.body["todo"][0]["complete"], true);
}

#[tokio::test]
async fn test_invalid_todo_bodies() {
    let app = TestApp::new().await;
    let alice = app.sign_up_and_login("alice").await;

    let response = app
        .request("POST", "/api/todo", Some(json!({ "item": "" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("POST", "/api/todo", Some(json!({ "text": "x" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request_raw("POST", "/api/todo", "[", Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("GET", "/api/todo", None, Some(&alice)).await;
    assert_eq!(response.body, json!({ "todos": [] }));
}

#[tokio::test]
async fn test_todos_are_removed_with_their_owner() {
    let app = TestApp::new().await;
    let admin = app.sign_up_and_login("admin").await;
    let alice = app.sign_up_and_login("alice").await;
    create_todo(&app, &alice, "orphan").await;
    let alice_id = app.public_id_of("alice").await;

    let todos = app.todos();
    let alice_user = app
        .users()
        .find_by_name("alice")
        .await
        .expect("query")
        .expect("exists");
    assert_eq!(
        todos
            .find_by_owner(alice_user.id)
            .await
            .expect("list")
            .len(),
        1
    );

    app.request("DELETE", &format!("/api/user/{alice_id}"), None, Some(&admin))
        .await;

    assert!(
        todos
            .find_by_owner(alice_user.id)
            .await
            .expect("list")
            .is_empty()
    );
}
