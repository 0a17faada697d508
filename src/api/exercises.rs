//! Exercise resource handlers.
//!
//! Full CRUD plus the query pipeline on the collection listing. All
//! lookups resolve the path identifier before anything else, so a bad
//! identifier always answers 404 even when the body is also invalid.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::model::{Exercise, ExercisePatch};
use crate::observability::Logger;
use crate::query::{ExerciseQuery, QueryPipeline, QueryResult};

use super::body;
use super::errors::{ApiError, ApiResult};
use super::response::DeleteResponse;
use super::state::SharedState;

/// Resource label used in response messages.
const RESOURCE: &str = "Exercise";

/// Field list echoed by create and replace validation failures.
const REQUIRED_FIELDS: &str = "name, category, difficulty, duration";

/// Routes for the `/exercises` collection.
pub fn exercise_routes(state: SharedState) -> Router {
    Router::new()
        .route("/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/exercises/:id",
            get(get_exercise)
                .put(replace_exercise)
                .patch(patch_exercise)
                .delete(delete_exercise),
        )
        .with_state(state)
}

/// `GET /exercises` with optional filter, sort, and pagination.
async fn list_exercises(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<QueryResult>> {
    let query = match ExerciseQuery::from_params(&params) {
        Ok(query) => query,
        Err(err) => {
            state.metrics.increment_queries_rejected();
            return Err(err.into());
        }
    };

    let snapshot = state.exercises()?.records().to_vec();
    let result = QueryPipeline::run(snapshot, &query);

    state.metrics.increment_queries_executed();
    Ok(Json(result))
}

/// `GET /exercises/:id`
async fn get_exercise(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Exercise>> {
    let id_num = parse_id(&id)?;

    let store = state.exercises()?;
    let exercise = store
        .find_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?
        .clone();

    Ok(Json(exercise))
}

/// `POST /exercises`
async fn create_exercise(
    State(state): State<SharedState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Exercise>)> {
    let (name, category, difficulty, duration) = parse_required(&payload)?;

    let mut store = state.exercises_mut()?;
    let exercise = Exercise {
        id: store.allocate_id(),
        name,
        category,
        difficulty,
        duration,
    };
    store.append(exercise.clone());
    drop(store);

    state.metrics.increment_exercises_created();
    let id = exercise.id.to_string();
    Logger::info("EXERCISE_CREATED", &[("id", id.as_str())]);

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// `PUT /exercises/:id` replaces every field; the identifier stays.
async fn replace_exercise(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Exercise>> {
    let id_num = parse_id(&id)?;

    let mut store = state.exercises_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;

    let (name, category, difficulty, duration) = parse_required(&payload)?;
    let exercise = Exercise {
        id: id_num,
        name,
        category,
        difficulty,
        duration,
    };
    store.replace(index, exercise.clone());
    drop(store);

    state.metrics.increment_exercises_updated();
    Ok(Json(exercise))
}

/// `PATCH /exercises/:id` merges only the fields present in the body.
async fn patch_exercise(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<Exercise>> {
    let id_num = parse_id(&id)?;

    let mut store = state.exercises_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;

    let patch = parse_patch(&payload)?;
    let exercise = store.merge_at(index, patch).clone();
    drop(store);

    state.metrics.increment_exercises_updated();
    Ok(Json(exercise))
}

/// `DELETE /exercises/:id`
async fn delete_exercise(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse<Exercise>>> {
    let id_num = parse_id(&id)?;

    let mut store = state.exercises_mut()?;
    let index = store
        .find_index_by_id(id_num)
        .ok_or_else(|| ApiError::not_found(RESOURCE, &id))?;
    let deleted = store.remove_at(index);
    drop(store);

    state.metrics.increment_exercises_deleted();
    Logger::info("EXERCISE_DELETED", &[("id", id.as_str())]);

    Ok(Json(DeleteResponse::new(RESOURCE, deleted)))
}

/// Parses the path identifier. A segment that is not a number cannot
/// match any record, so it reports the same 404 and echoes the raw text.
fn parse_id(raw: &str) -> ApiResult<u64> {
    raw.parse().map_err(|_| ApiError::not_found(RESOURCE, raw))
}

/// Extracts and validates the full field set for create and replace.
fn parse_required(payload: &Value) -> ApiResult<(String, String, String, f64)> {
    let name = body::required_string(payload, "name", REQUIRED_FIELDS)?;
    let category = body::required_string(payload, "category", REQUIRED_FIELDS)?;
    let difficulty = body::required_string(payload, "difficulty", REQUIRED_FIELDS)?;
    let duration = body::required_number(payload, "duration", REQUIRED_FIELDS)?;
    Ok((name, category, difficulty, duration))
}

/// Extracts exactly the fields present in a partial-update body.
fn parse_patch(payload: &Value) -> ApiResult<ExercisePatch> {
    Ok(ExercisePatch {
        name: body::optional_string(payload, "name")?,
        category: body::optional_string(payload, "category")?,
        difficulty: body::optional_string(payload, "difficulty")?,
        duration: body::optional_number(payload, "duration")?,
    })
}
