//! # Task Management Handlers
//!
//! HTTP handlers for the task CRUD and bulk endpoints. Title validation
//! runs here, before the lifecycle engine is invoked; everything else is
//! delegated to the engine and its typed errors.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Task, TaskFilter};
use crate::validation::validate_title;
use crate::web::errors::ApiResult;
use crate::web::state::AppState;

/// Query parameters for task listing
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleAllRequest {
    pub completed: bool,
}

/// List tasks with an optional filter: GET /tasks?filter=
///
/// Unrecognized filter values fall back to "all" rather than erroring.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let filter = TaskFilter::parse(query.filter.as_deref());
    debug!(?filter, "listing tasks");

    let tasks = state.engine.list_tasks(filter).await?;
    Ok(Json(tasks))
}

/// Get task details: GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    let task = state.engine.get_task(id).await?;
    Ok(Json(task))
}

/// Create a new task: POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    validate_title(&request.title)?;

    let task = state.engine.create_task(request.title).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Rename a task: PUT /tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    validate_title(&request.title)?;

    let task = state.engine.update_task(id, request.title).await?;
    Ok(Json(task))
}

/// Toggle a task's completion flag: PUT /tasks/{id}/toggle
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    let task = state.engine.toggle_task(id).await?;
    Ok(Json(task))
}

/// Delete a task: DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.engine.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete all completed tasks: DELETE /tasks/completed
pub async fn delete_completed_tasks(State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.engine.delete_completed_tasks().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Set completion on every task: PUT /tasks/toggle-all
pub async fn toggle_all_tasks(
    State(state): State<AppState>,
    Json(request): Json<ToggleAllRequest>,
) -> ApiResult<StatusCode> {
    state.engine.toggle_all_tasks(request.completed).await?;
    Ok(StatusCode::NO_CONTENT)
}
