// src/api/mod.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::service::{ScheduleService, TeamService};

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub schedule_service: Arc<ScheduleService>,
    pub team_service: Arc<TeamService>,
}

impl AppState {
    pub fn new(schedule_service: Arc<ScheduleService>, team_service: Arc<TeamService>) -> Self {
        Self {
            schedule_service,
            team_service,
        }
    }
}

/// CORS ミドルウェア設定
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use std::env;

    // CORS_ALLOWED_ORIGINS環境変数から許可するオリジンを取得
    // 設定されていない場合はFRONTEND_URLを使用、それもなければデフォルト値
    let allowed_origin = env::var("CORS_ALLOWED_ORIGINS")
        .or_else(|_| env::var("FRONTEND_URL"))
        .unwrap_or_else(|_| "http://localhost:5173".to_string());

    let origin_header = allowed_origin
        .parse::<axum::http::HeaderValue>()
        .expect("Invalid CORS origin");

    tower_http::cors::CorsLayer::new()
        .allow_origin(origin_header)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PATCH,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600)) // プリフライトリクエストのキャッシュ時間
}

pub async fn health_check_handler() -> &'static str {
    "OK"
}

/// 全ルーターを束ねてアプリケーションを構築する
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(handlers::task_handler::task_router(app_state.clone()))
        .merge(handlers::team_handler::team_router(app_state.clone()))
        .merge(handlers::calendar_handler::calendar_router(app_state))
        .route("/health", get(health_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
