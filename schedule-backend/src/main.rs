// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use schedule_backend::api::{create_router, AppState};
use schedule_backend::config::Config;
use schedule_backend::service::{SchedulePolicy, ScheduleService, TeamService};
use schedule_backend::storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schedule_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Schedule Backend server...");

    // 設定を読み込む
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // ストレージバックエンドを初期化
    let store = storage::connect(&config).await?;

    let policy = SchedulePolicy {
        allow_overlap: config.allow_overlap,
    };
    let schedule_service = Arc::new(ScheduleService::with_policy(store.clone(), policy));
    let team_service = Arc::new(TeamService::new(store));

    // チームが空なら既定のチームを投入する
    team_service.ensure_default_teams().await?;

    // ルーターの設定
    let app_router = create_router(AppState::new(schedule_service, team_service));

    // サーバーの起動
    tracing::info!(
        "Router configured. Server listening on {}",
        config.server_addr
    );

    let listener = TcpListener::bind(&config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
