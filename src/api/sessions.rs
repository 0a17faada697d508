//! Workout session resource handlers.
//!
//! Deliberately plainer than the exercise handlers: the collection
//! listing returns a bare array and never consults the query pipeline.
//! Query parameters on `GET /sessions` are ignored.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::model::{Session, SessionPatch};
use crate::observability::Logger;

use super::body;
use super::errors::{ApiError, ApiResult};
use super::response::DeleteResponse;
use super::state::SharedState;

/// Resource label used in response messages.
const RESOURCE: &str = "Session";

/// Field list echoed by create and replace validation failures.
const REQUIRED_FIELDS: &str = "exerciseId, reps, sets, notes";

/// Routes for the `/sessions` collection.
pub fn session_routes(state: SharedState) -> Router {
    Router::new()
        .route("/sessions", get(list_sessions).post(create_session))
        .route(
            "/sessions/:id",
            get(get_session)
                .put(replace_session)
                .patch(patch_session)
                .delete(delete_session),
        )
        .with_state(state)
}

/// `GET /sessions` returns every record in insertion order.
async fn list_sessions(State(state): State<SharedState>) -> ApiResult<Json<Vec<Session>>> {
    let sessions = state.sessions()?.records().to_vec();
    Ok(Json(sessions))
}

/// `GET /sessions/:id`
async fn get_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Session>> {
    let id_num = parse_id(&id)?;

    let store = state.sessions()?;
    let session = store
        .find_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?
        .clone();

    Ok(Json(session))
}

/// `POST /sessions`
async fn create_session(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Session>)> {
    let (exercise_id, reps, sets, notes) = parse_required(&payload)?;

    let mut store = state.sessions_mut()?;
    let session = Session {
        id: store.allocate_id(),
        exercise_id,
        reps,
        sets,
        notes,
    };
    store.append(session.clone());
    drop(store);

    state.metrics.increment_sessions_created();
    let id = session.id.to_string();
    Logger::info("SESSION_CREATED", &[("id", id.as_str())]);

    Ok((StatusCode::CREATED, Json(session)))
}

/// `PUT /sessions/:id` replaces every field; the identifier stays.
async fn replace_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Session>> {
    let id_num = parse_id(&id)?;

    let mut store = state.sessions_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;

    let (exercise_id, reps, sets, notes) = parse_required(&payload)?;
    let session = Session {
        id: id_num,
        exercise_id,
        reps,
        sets,
        notes,
    };
    store.replace(index, session.clone());
    drop(store);

    state.metrics.increment_sessions_updated();
    Ok(Json(session))
}

/// `PATCH /sessions/:id` merges only the fields present in the body.
async fn patch_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Session>> {
    let id_num = parse_id(&id)?;

    let mut store = state.sessions_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;

    let patch = parse_patch(&payload)?;
    let session = store.merge_at(index, patch).clone();
    drop(store);

    state.metrics.increment_sessions_updated();
    Ok(Json(session))
}

/// `DELETE /sessions/:id`
async fn delete_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse<Session>>> {
    let id_num = parse_id(&id)?;

    let mut store = state.sessions_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;
    let deleted = store.remove_at(index);
    drop(store);

    state.metrics.increment_sessions_deleted();
    Logger::info("SESSION_DELETED", &[("id", id.as_str())]);

    Ok(Json(DeleteResponse::new(RESOURCE, deleted)))
}

fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::not_found(RESOURCE, raw))
}

/// Extracts and validates the full field set for create and replace.
fn parse_required(payload: &Value) -> ApiResult<(u64, f64, f64, String)> {
    let exercise_id = body::required_id(payload, "exerciseId", REQUIRED_FIELDS)?;
    let reps = body::required_number(payload, "reps", REQUIRED_FIELDS)?;
    let sets = body::required_number(payload, "sets", REQUIRED_FIELDS)?;
    let notes = body::required_string(payload, "notes", REQUIRED_FIELDS)?;
    Ok((exercise_id, reps, sets, notes))
}

/// Extracts exactly the fields present in a partial-update body.
fn parse_patch(payload: &Value) -> ApiResult<SessionPatch> {
    Ok(SessionPatch {
        exercise_id: body::optional_id(payload, "exerciseId")?,
        reps: body::optional_number(payload, "reps")?,
        sets: body::optional_number(payload, "sets")?,
        notes: body::optional_string(payload, "notes")?,
    })
}
