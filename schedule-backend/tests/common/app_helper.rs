// tests/common/app_helper.rs

use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use schedule_backend::{
    api::{create_router, AppState},
    service::{SchedulePolicy, ScheduleService, TeamService},
    storage::{DatabaseStore, InMemoryStore, ScheduleStore},
};

/// 指定したストアとポリシーでアプリを組み立てる
pub fn setup_app_with_store(store: Arc<dyn ScheduleStore>, policy: SchedulePolicy) -> Router {
    super::init_test_env();
    let schedule_service = Arc::new(ScheduleService::with_policy(store.clone(), policy));
    let team_service = Arc::new(TeamService::new(store));
    create_router(AppState::new(schedule_service, team_service))
}

/// メモリバックエンドのアプリ
pub fn setup_memory_app() -> Router {
    setup_app_with_store(Arc::new(InMemoryStore::new()), SchedulePolicy::default())
}

/// マイグレーション適用済みのSQLiteストア
pub async fn setup_sqlite_store() -> DatabaseStore {
    // インメモリSQLiteは接続ごとに別のDBになるためコネクションを1本に固定する
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    DatabaseStore::new(db)
}

/// JSONリクエストを作成
pub fn json_request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let method = Method::from_bytes(method.as_bytes()).unwrap();
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// レスポンスボディをJSONとして読み出す
pub async fn response_json(res: Response) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// チームを1つ作ってIDを返す
pub async fn create_team(app: &Router, name: &str, color: &str) -> String {
    let req = json_request(
        "POST",
        "/teams",
        Some(super::test_data::create_team_payload(name, color)),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = response_json(res).await;
    body["data"]["id"].as_str().unwrap().to_string()
}

/// タスクを1つ作ってレスポンスの data を返す
pub async fn create_task(app: &Router, payload: Value) -> Value {
    let req = json_request("POST", "/tasks", Some(payload));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    response_json(res).await["data"].clone()
}
