// src/api/handlers/team_handler.rs
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

use crate::api::dto::team_dto::{CreateTeamDto, TeamDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;

pub async fn list_teams_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<TeamDto>>> {
    let teams = app_state.team_service.list_teams().await?;
    Ok(ApiResponse::success(teams))
}

pub async fn create_team_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTeamDto>,
) -> AppResult<impl IntoResponse> {
    info!(team_name = %payload.name, "Creating new team");

    let team_dto = app_state.team_service.create_team(payload).await?;

    info!(team_id = %team_dto.id, "Team created successfully");

    Ok((StatusCode::CREATED, ApiResponse::success(team_dto)))
}

// --- Router Setup ---

pub fn team_router(app_state: AppState) -> Router {
    Router::new()
        .route("/teams", get(list_teams_handler).post(create_team_handler))
        .with_state(app_state)
}
