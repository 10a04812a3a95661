use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::WithRejection;
use crate::errors::{AppError, AppResult};
use crate::models::{CompleteTaskResponse, CreateTaskForm, MessageResponse, NewTask, Task};
use crate::state::AppState;

// No field checks here beyond the document schema enforced by the store.
pub async fn create_task(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<CreateTaskForm>, AppError>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = state.store.create_task(NewTask::from(form)).await?;

    tracing::info!("Created {} task {} for user {}", task.category.as_str(), task.id, task.user_id);
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.store.tasks_for_user(&user_id).await?;

    tracing::debug!("Found {} tasks for user {}", tasks.len(), user_id);
    Ok(Json(tasks))
}

/// Marks the task done and alerts the owner's emergency contact.
///
/// The alert is dispatched in the background; its outcome never changes this response.
pub async fn complete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<CompleteTaskResponse>> {
    let task = state
        .store
        .complete_task(&task_id)
        .await?
        .ok_or(AppError::TaskNotFound)?;

    tracing::info!("Task {} completed", task_id);

    match state.store.find_user(&task.user_id).await? {
        Some(user) => {
            state.notifier.notify_task_completed(&user, &task);
        }
        None => tracing::warn!("Task {} belongs to unknown user {}", task_id, task.user_id),
    }

    Ok(Json(CompleteTaskResponse {
        message: "Task completed and email sent!".into(),
        task,
    }))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state
        .store
        .delete_task(&task_id)
        .await?
        .ok_or(AppError::TaskNotFound)?;

    tracing::info!("Task {} deleted", task_id);
    Ok(Json(MessageResponse {
        message: "Task deleted successfully".into(),
    }))
}
