// src/api/dto/task_dto.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::task_model;
use crate::utils::validation;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateTaskDto {
    #[validate(
        length(
            min = validation::task::TITLE_MIN_LENGTH,
            max = validation::task::TITLE_MAX_LENGTH,
            message = "Task title must be between 1 and 200 characters"
        ),
        custom(function = validation::validate_task_title)
    )]
    pub title: String,

    pub team_id: Uuid,

    #[validate(range(
        min = validation::task::DURATION_MIN_MINUTES,
        max = validation::task::DURATION_MAX_MINUTES,
        message = "Duration must be between 15 and 480 minutes"
    ))]
    pub duration: i32,

    pub start_date: DateTime<Utc>,

    #[validate(length(
        max = validation::task::LOCATION_MAX_LENGTH,
        message = "Location must not exceed 200 characters"
    ))]
    pub location: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct UpdateTaskDto {
    #[validate(
        length(
            min = validation::task::TITLE_MIN_LENGTH,
            max = validation::task::TITLE_MAX_LENGTH,
            message = "Task title must be between 1 and 200 characters"
        ),
        custom(function = validation::validate_task_title)
    )]
    pub title: Option<String>,

    pub team_id: Option<Uuid>,

    pub status: Option<String>,

    #[validate(range(
        min = validation::task::DURATION_MIN_MINUTES,
        max = validation::task::DURATION_MAX_MINUTES,
        message = "Duration must be between 15 and 480 minutes"
    ))]
    pub duration: Option<i32>,

    pub start_date: Option<DateTime<Utc>>,

    #[validate(length(
        max = validation::task::LOCATION_MAX_LENGTH,
        message = "Location must not exceed 200 characters"
    ))]
    pub location: Option<String>,
}

impl UpdateTaskDto {
    /// 全フィールドが未指定かどうか
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.team_id.is_none()
            && self.status.is_none()
            && self.duration.is_none()
            && self.start_date.is_none()
            && self.location.is_none()
    }
}

/// タスクをスロット（日付と時刻）へ移動するリクエスト。分は常に00になる。
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct MoveTaskDto {
    pub date: NaiveDate,

    #[validate(range(max = 23, message = "Hour must be between 0 and 23"))]
    pub hour: u32,
}

// --- Query DTOs ---

#[derive(Deserialize, Debug, Default)]
pub struct TaskFilterDto {
    pub team_id: Option<Uuid>,
    /// この時刻以降に開始するタスクに絞る
    pub from: Option<DateTime<Utc>>,
    /// この時刻より前に開始するタスクに絞る
    pub to: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, Validate)]
pub struct ConflictQueryDto {
    pub start_date: DateTime<Utc>,

    #[validate(range(
        min = validation::task::DURATION_MIN_MINUTES,
        max = validation::task::DURATION_MAX_MINUTES,
        message = "Duration must be between 15 and 480 minutes"
    ))]
    pub duration: i32,

    pub team_id: Option<Uuid>,
    /// 照会時に除外するタスク（移動対象自身など）
    pub exclude_task: Option<Uuid>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TaskDto {
    pub id: Uuid,
    pub title: String,
    pub team_id: Uuid,
    pub status: String,
    pub duration: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// SeaORM の Model から TaskDto への変換
impl From<task_model::Model> for TaskDto {
    fn from(model: task_model::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            team_id: model.team_id,
            status: model.status,
            duration: model.duration,
            start_date: model.start_date,
            end_date: model.end_date,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_dto_validation() {
        let dto = CreateTaskDto {
            title: "Sprint planning".to_string(),
            team_id: Uuid::new_v4(),
            duration: 60,
            start_date: Utc::now(),
            location: None,
        };
        assert!(dto.validate().is_ok());

        let dto = CreateTaskDto {
            title: "  ".to_string(),
            team_id: Uuid::new_v4(),
            duration: 5,
            start_date: Utc::now(),
            location: None,
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("duration"));
    }

    #[test]
    fn test_update_task_dto_is_empty() {
        let dto = UpdateTaskDto {
            title: None,
            team_id: None,
            status: None,
            duration: None,
            start_date: None,
            location: None,
        };
        assert!(dto.is_empty());

        let dto = UpdateTaskDto {
            status: Some("completed".to_string()),
            ..dto
        };
        assert!(!dto.is_empty());
    }

    #[test]
    fn test_move_task_dto_rejects_hour_above_23() {
        let dto = MoveTaskDto {
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            hour: 24,
        };
        assert!(dto.validate().is_err());
    }
}
