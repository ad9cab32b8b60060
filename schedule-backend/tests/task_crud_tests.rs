// tests/task_crud_tests.rs

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use common::{app_helper, test_data};

#[tokio::test]
async fn test_create_task_returns_envelope_with_created_task() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let start = test_data::monday_at(9, 0);
    let payload = test_data::create_task_payload(&team_id, "Sprint planning", start, 60);

    let req = app_helper::json_request("POST", "/tasks", Some(payload));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["meta"]["request_id"].as_str().is_some());

    let data = &body["data"];
    assert_eq!(data["title"], "Sprint planning");
    assert_eq!(data["team_id"].as_str().unwrap(), team_id);
    assert_eq!(data["status"], "scheduled");
    assert_eq!(data["duration"], 60);

    let end_date: DateTime<Utc> = data["end_date"].as_str().unwrap().parse().unwrap();
    assert_eq!(end_date, test_data::monday_at(10, 0));
}

#[tokio::test]
async fn test_create_task_with_unknown_team_is_rejected() {
    let app = app_helper::setup_memory_app();

    let payload = test_data::create_task_payload(
        &Uuid::new_v4().to_string(),
        "Orphan task",
        test_data::monday_at(9, 0),
        60,
    );
    let req = app_helper::json_request("POST", "/tasks", Some(payload));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Team not found"));
}

#[tokio::test]
async fn test_create_task_collects_validation_errors() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    // 空タイトルと短すぎる所要時間
    let payload = test_data::create_task_payload(&team_id, "", test_data::monday_at(9, 0), 5);
    let req = app_helper::json_request("POST", "/tasks", Some(payload));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERRORS");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("title"));
    assert!(message.contains("duration"));
}

#[tokio::test]
async fn test_get_task_round_trip() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let created = app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_id, "Standup", test_data::monday_at(10, 0), 15),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    let req = app_helper::json_request("GET", &format!("/tasks/{task_id}"), None);
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn test_get_missing_task_returns_not_found() {
    let app = app_helper::setup_memory_app();

    let req = app_helper::json_request("GET", &format!("/tasks/{}", Uuid::new_v4()), None);
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_get_task_with_invalid_uuid_is_rejected() {
    let app = app_helper::setup_memory_app();

    let req = app_helper::json_request("GET", "/tasks/not-a-uuid", None);
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERRORS");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid UUID format"));
}

#[tokio::test]
async fn test_update_task_patches_only_given_fields() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let created = app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_id, "Standup", test_data::monday_at(10, 0), 15),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    let patch = json!({
        "title": "Daily standup",
        "location": "Room 2",
    });
    let req = app_helper::json_request("PATCH", &format!("/tasks/{task_id}"), Some(patch));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = app_helper::response_json(res).await;
    let data = &body["data"];
    assert_eq!(data["title"], "Daily standup");
    assert_eq!(data["location"], "Room 2");
    // 指定していないフィールドは変わらない
    assert_eq!(data["status"], "scheduled");
    assert_eq!(data["duration"], 15);
    assert_eq!(data["start_date"], created["start_date"]);
}

#[tokio::test]
async fn test_update_task_rejects_empty_payload() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let created = app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_id, "Standup", test_data::monday_at(10, 0), 15),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    let req = app_helper::json_request("PATCH", &format!("/tasks/{task_id}"), Some(json!({})));
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("cannot be empty"));
}

#[tokio::test]
async fn test_update_task_rejects_unknown_status() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let created = app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_id, "Standup", test_data::monday_at(10, 0), 15),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    let req = app_helper::json_request(
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "status": "done" })),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid task status"));
}

#[tokio::test]
async fn test_update_task_accepts_status_transition() {
    let app = app_helper::setup_memory_app();
    let team_id = app_helper::create_team(&app, "Team A", "#4f46e5").await;

    let created = app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_id, "Standup", test_data::monday_at(10, 0), 15),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    // どの状態からでも自由に遷移できる
    for status in ["completed", "draft", "cancelled", "scheduled"] {
        let req = app_helper::json_request(
            "PATCH",
            &format!("/tasks/{task_id}"),
            Some(json!({ "status": status })),
        );
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = app_helper::response_json(res).await;
        assert_eq!(body["data"]["status"], status);
    }
}

#[tokio::test]
async fn test_list_tasks_filters_by_team_and_window() {
    let app = app_helper::setup_memory_app();
    let team_a = app_helper::create_team(&app, "Team A", "#4f46e5").await;
    let team_b = app_helper::create_team(&app, "Team B", "#0891b2").await;

    app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_a, "Morning", test_data::monday_at(9, 0), 60),
    )
    .await;
    app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_a, "Afternoon", test_data::monday_at(14, 0), 60),
    )
    .await;
    app_helper::create_task(
        &app,
        test_data::create_task_payload(&team_b, "Other team", test_data::monday_at(9, 0), 60),
    )
    .await;

    // チームで絞り込み
    let req = app_helper::json_request("GET", &format!("/tasks?team_id={team_a}"), None);
    let res = app.clone().oneshot(req).await.unwrap();
    let body = app_helper::response_json(res).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // 期間で絞り込み（fromは含む、toは含まない）
    let from = test_data::utc_param(test_data::monday_at(12, 0));
    let to = test_data::utc_param(test_data::monday_at(18, 0));
    let req = app_helper::json_request(
        "GET",
        &format!("/tasks?team_id={team_a}&from={from}&to={to}"),
        None,
    );
    let res = app.clone().oneshot(req).await.unwrap();
    let body = app_helper::response_json(res).await;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Afternoon");
}

#[tokio::test]
async fn test_create_team_and_list_round_trip() {
    let app = app_helper::setup_memory_app();

    let req = app_helper::json_request("GET", "/teams", None);
    let res = app.clone().oneshot(req).await.unwrap();
    let body = app_helper::response_json(res).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    app_helper::create_team(&app, "Design", "#0891b2").await;

    let req = app_helper::json_request("GET", "/teams", None);
    let res = app.clone().oneshot(req).await.unwrap();
    let body = app_helper::response_json(res).await;
    let teams = body["data"].as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Design");
    assert_eq!(teams[0]["color"], "#0891b2");
}

#[tokio::test]
async fn test_create_team_rejects_invalid_color() {
    let app = app_helper::setup_memory_app();

    let req = app_helper::json_request(
        "POST",
        "/teams",
        Some(test_data::create_team_payload("Team A", "blue")),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = app_helper::response_json(res).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERRORS");
    assert!(body["error"]["message"].as_str().unwrap().contains("color"));
}

#[tokio::test]
async fn test_health_check() {
    let app = app_helper::setup_memory_app();

    let req = app_helper::json_request("GET", "/health", None);
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}
