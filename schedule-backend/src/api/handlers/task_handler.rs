// src/api/handlers/task_handler.rs
use axum::{
    extract::{FromRequestParts, Json, Path, Query, State},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::task_dto::{
    ConflictQueryDto, CreateTaskDto, MoveTaskDto, TaskDto, TaskFilterDto, UpdateTaskDto,
};
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::types::ApiResponse;

// カスタムUUID抽出器
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // パスパラメータを文字列として最初に抽出
        let Path(path_str) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::ValidationErrors(vec!["Invalid path parameter".to_string()]))?;

        // UUIDをパースして検証エラー形式で返す
        let uuid = Uuid::parse_str(&path_str).map_err(|_| {
            AppError::ValidationErrors(vec![format!("Invalid UUID format: '{}'", path_str)])
        })?;

        Ok(UuidPath(uuid))
    }
}

// --- CRUD Handlers ---

pub async fn create_task_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTaskDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        task_title = %payload.title,
        team_id = %payload.team_id,
        start_date = %payload.start_date,
        "Creating new task"
    );

    let task_dto = app_state.schedule_service.create_task(payload).await?;

    info!(task_id = %task_dto.id, "Task created successfully");

    Ok((StatusCode::CREATED, ApiResponse::success(task_dto)))
}

pub async fn get_task_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
) -> AppResult<ApiResponse<TaskDto>> {
    let task_dto = app_state.schedule_service.get_task(id).await?;
    Ok(ApiResponse::success(task_dto))
}

pub async fn list_tasks_handler(
    State(app_state): State<AppState>,
    Query(filter): Query<TaskFilterDto>,
) -> AppResult<ApiResponse<Vec<TaskDto>>> {
    let tasks = app_state.schedule_service.list_tasks(filter).await?;

    info!(task_count = %tasks.len(), "Tasks retrieved successfully");

    Ok(ApiResponse::success(tasks))
}

pub async fn update_task_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<UpdateTaskDto>,
) -> AppResult<ApiResponse<TaskDto>> {
    info!(task_id = %id, "Updating task");

    let task_dto = app_state.schedule_service.update_task(id, payload).await?;

    Ok(ApiResponse::success(task_dto))
}

// --- Scheduling Handlers ---

pub async fn move_task_handler(
    State(app_state): State<AppState>,
    UuidPath(id): UuidPath,
    Json(payload): Json<MoveTaskDto>,
) -> AppResult<ApiResponse<TaskDto>> {
    payload.validate()?;

    info!(
        task_id = %id,
        date = %payload.date,
        hour = %payload.hour,
        "Moving task to slot"
    );

    let task_dto = app_state
        .schedule_service
        .move_task_to_slot(id, payload.date, payload.hour)
        .await?;

    Ok(ApiResponse::success(task_dto))
}

pub async fn check_conflicts_handler(
    State(app_state): State<AppState>,
    Query(query): Query<ConflictQueryDto>,
) -> AppResult<ApiResponse<Vec<TaskDto>>> {
    query.validate()?;

    let conflicts = app_state
        .schedule_service
        .check_conflicts(
            query.start_date,
            query.duration,
            query.team_id,
            query.exclude_task,
        )
        .await?;

    info!(conflict_count = %conflicts.len(), "Conflict check completed");

    Ok(ApiResponse::success(conflicts))
}

// --- Router Setup ---

pub fn task_router(app_state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler).patch(update_task_handler),
        )
        .route("/tasks/{id}/move", post(move_task_handler))
        .route("/conflicts", get(check_conflicts_handler))
        .with_state(app_state)
}
