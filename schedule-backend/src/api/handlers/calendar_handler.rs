// src/api/handlers/calendar_handler.rs
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};

use crate::api::dto::calendar_dto::{CalendarQueryDto, DayViewDto, MonthViewDto, WeekViewDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;

pub async fn day_view_handler(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQueryDto>,
) -> AppResult<ApiResponse<DayViewDto>> {
    let view = app_state.schedule_service.day_view(query.date).await?;
    Ok(ApiResponse::success(view))
}

pub async fn week_view_handler(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQueryDto>,
) -> AppResult<ApiResponse<WeekViewDto>> {
    let view = app_state.schedule_service.week_view(query.date).await?;
    Ok(ApiResponse::success(view))
}

pub async fn month_view_handler(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQueryDto>,
) -> AppResult<ApiResponse<MonthViewDto>> {
    let view = app_state.schedule_service.month_view(query.date).await?;
    Ok(ApiResponse::success(view))
}

// --- Router Setup ---

pub fn calendar_router(app_state: AppState) -> Router {
    Router::new()
        .route("/calendar/day", get(day_view_handler))
        .route("/calendar/week", get(week_view_handler))
        .route("/calendar/month", get(month_view_handler))
        .with_state(app_state)
}
