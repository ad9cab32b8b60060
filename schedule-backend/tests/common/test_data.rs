// tests/common/test_data.rs

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde_json::{json, Value};

/// テストの基準日。2025-03-03 は月曜日。
pub const MONDAY: &str = "2025-03-03";

pub fn monday_at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, hour, minute, 0).unwrap()
}

/// クエリ文字列でも使える時刻表現（Zサフィックス、+は含まない）
pub fn utc_param(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn create_task_payload(
    team_id: &str,
    title: &str,
    start: DateTime<Utc>,
    duration: i32,
) -> Value {
    json!({
        "title": title,
        "team_id": team_id,
        "duration": duration,
        "start_date": utc_param(start),
    })
}

pub fn create_team_payload(name: &str, color: &str) -> Value {
    json!({
        "name": name,
        "color": color,
    })
}
