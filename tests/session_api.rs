//! Workout session API integration tests
//!
//! The session collection is deliberately plainer than the exercise
//! collection. Covers:
//! - Create validation over the session field set
//! - The bare-array listing that ignores query parameters
//! - Lookup, replace, patch, and delete semantics
//! - The camelCase `exerciseId` wire name

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use fittrack::api::HttpServer;

// =============================================================================
// Helper Functions
// =============================================================================

fn app() -> Router {
    HttpServer::new().router()
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn session(exercise_id: u64, reps: f64, notes: &str) -> Value {
    json!({
        "exerciseId": exercise_id,
        "reps": reps,
        "sets": 3,
        "notes": notes
    })
}

async fn create(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/sessions", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

// =============================================================================
// Create
// =============================================================================

/// A valid body answers 201 with the stored record.
#[tokio::test]
async fn test_create_returns_201_with_the_new_record() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(session(1, 12.0, "first set of the day")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["exerciseId"], 1);
    assert_eq!(body["reps"], 12.0);
    assert_eq!(body["sets"], 3.0);
    assert_eq!(body["notes"], "first set of the day");
}

/// The wire name is camelCase; a snake_case key does not count.
#[tokio::test]
async fn test_create_requires_the_camel_case_field_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({ "exercise_id": 1, "reps": 12, "sets": 3, "notes": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "All fields are required: exerciseId, reps, sets, notes."
    );
}

/// Missing notes answer 400 naming every required field.
#[tokio::test]
async fn test_create_rejects_missing_notes() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(json!({ "exerciseId": 1, "reps": 12, "sets": 3 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "All fields are required: exerciseId, reps, sets, notes."
    );
}

/// A rep count of exactly zero counts as missing.
#[tokio::test]
async fn test_create_rejects_zero_reps() {
    let app = app();
    let (status, _body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(session(1, 0.0, "warmup")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// An exercise id of zero counts as missing.
#[tokio::test]
async fn test_create_rejects_zero_exercise_id() {
    let app = app();
    let (status, _body) = send(
        &app,
        Method::POST,
        "/sessions",
        Some(session(0, 10.0, "warmup")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Empty notes count as missing.
#[tokio::test]
async fn test_create_rejects_empty_notes() {
    let app = app();
    let (status, _body) = send(&app, Method::POST, "/sessions", Some(session(1, 10.0, ""))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// The referenced exercise does not have to exist.
#[tokio::test]
async fn test_create_does_not_check_the_exercise_reference() {
    let app = app();
    let body = create(&app, session(999, 10.0, "dangling reference")).await;
    assert_eq!(body["exerciseId"], 999);
}

// =============================================================================
// List
// =============================================================================

/// The listing is a bare array in insertion order, no envelope.
#[tokio::test]
async fn test_list_returns_a_bare_array_in_insertion_order() {
    let app = app();
    create(&app, session(1, 10.0, "a")).await;
    create(&app, session(2, 8.0, "b")).await;
    create(&app, session(3, 6.0, "c")).await;

    let (status, body) = send(&app, Method::GET, "/sessions", None).await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["notes"], "a");
    assert_eq!(records[1]["notes"], "b");
    assert_eq!(records[2]["notes"], "c");
}

/// Query parameters on the session listing are ignored, not rejected.
#[tokio::test]
async fn test_list_ignores_query_parameters() {
    let app = app();
    create(&app, session(1, 10.0, "a")).await;
    create(&app, session(2, 8.0, "b")).await;

    let (status, body) = send(&app, Method::GET, "/sessions?sort=-reps&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["notes"], "a");
}

// =============================================================================
// Lookup / Replace / Patch / Delete
// =============================================================================

/// GET by id returns the bare record.
#[tokio::test]
async fn test_get_by_id_returns_the_record() {
    let app = app();
    create(&app, session(1, 10.0, "leg day")).await;

    let (status, body) = send(&app, Method::GET, "/sessions/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "leg day");
}

/// Unknown ids answer 404 with the id in the message.
#[tokio::test]
async fn test_get_unknown_id_returns_404() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/sessions/8", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Session with id 8 not found.");
}

/// PUT replaces every field and keeps the identifier.
#[tokio::test]
async fn test_put_replaces_every_field_and_keeps_the_id() {
    let app = app();
    create(&app, session(1, 10.0, "before")).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/sessions/1",
        Some(json!({ "exerciseId": 2, "reps": 15, "sets": 4, "notes": "after" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["exerciseId"], 2);
    assert_eq!(body["reps"], 15.0);
    assert_eq!(body["notes"], "after");
}

/// PATCH changes only the supplied fields.
#[tokio::test]
async fn test_patch_updates_only_supplied_fields() {
    let app = app();
    create(&app, session(1, 10.0, "before")).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/sessions/1",
        Some(json!({ "notes": "after" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"], "after");
    assert_eq!(body["reps"], 10.0);
    assert_eq!(body["exerciseId"], 1);
}

/// Unlike create, a patch may set reps to zero.
#[tokio::test]
async fn test_patch_can_zero_the_reps() {
    let app = app();
    create(&app, session(1, 10.0, "skipped")).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/sessions/1",
        Some(json!({ "reps": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reps"], 0.0);
}

/// DELETE answers with a confirmation message and the removed record.
#[tokio::test]
async fn test_delete_returns_message_and_the_deleted_record() {
    let app = app();
    create(&app, session(1, 10.0, "a")).await;
    create(&app, session(2, 8.0, "b")).await;
    create(&app, session(3, 6.0, "c")).await;

    let (status, body) = send(&app, Method::DELETE, "/sessions/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Session deleted successfully.");
    assert_eq!(body["deleted"]["id"], 2);

    let (_status, body) = send(&app, Method::GET, "/sessions", None).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[1]["id"], 3);
}

/// Session identifiers are never reused after a delete.
#[tokio::test]
async fn test_ids_are_never_reused_after_delete() {
    let app = app();
    create(&app, session(1, 10.0, "a")).await;
    create(&app, session(1, 10.0, "b")).await;

    send(&app, Method::DELETE, "/sessions/2", None).await;

    let body = create(&app, session(1, 10.0, "c")).await;
    assert_eq!(body["id"], 3);
}
