use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use taskboard_db::Task;

use crate::{error::ApiError, state::AppState};

/// Matches the VARCHAR(100) bound on the title column; longer titles are
/// rejected rather than truncated.
const MAX_TITLE_CHARS: usize = 100;

#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TogglePayload {
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn validate_title(title: Option<&str>) -> Result<&str, ApiError> {
    let title = title.unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ApiError::Validation(
            "title must be at most 100 characters".to_string(),
        ));
    }
    Ok(title)
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.list_tasks().await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<CreateTaskResponse>, ApiError> {
    let title = validate_title(payload.title.as_deref())?;

    let id = state
        .store
        .create_task(title, payload.description.as_deref())
        .await?;

    Ok(Json(CreateTaskResponse {
        id,
        message: "Tarea creada exitosamente".to_string(),
    }))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let title = validate_title(payload.title.as_deref())?;

    let found = state
        .store
        .update_task(task_id, title, payload.description.as_deref())
        .await?;
    if !found {
        return Err(ApiError::NotFound(format!("task {} not found", task_id)));
    }

    Ok(Json(MessageResponse {
        message: "Tarea actualizada exitosamente".to_string(),
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let found = state.store.delete_task(task_id).await?;
    if !found {
        return Err(ApiError::NotFound(format!("task {} not found", task_id)));
    }

    Ok(Json(MessageResponse {
        message: "Tarea eliminada exitosamente".to_string(),
    }))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TogglePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let completed = payload.completed.ok_or_else(|| {
        ApiError::Validation("completed state is required".to_string())
    })?;

    let found = state.store.set_completed(task_id, completed).await?;
    if !found {
        return Err(ApiError::NotFound(format!("task {} not found", task_id)));
    }

    Ok(Json(MessageResponse {
        message: "Estado de tarea actualizado exitosamente".to_string(),
    }))
}
