// ストレージバックエンドの抽象化。メモリ・ローカルファイル・データベースの
// 3種類を ScheduleStore トレイト越しに同じ操作で扱う。

pub mod database;
pub mod local;
pub mod memory;

pub use database::DatabaseStore;
pub use local::LocalStore;
pub use memory::InMemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Config, StorageBackend};
use crate::db;
use crate::domain::task_model;
use crate::domain::task_status::TaskStatus;
use crate::domain::team_model;
use crate::error::{AppError, AppResult};
use crate::utils::validation;

/// 新規タスクの投入データ。end_date は start_date + duration と一致していること。
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub team_id: Uuid,
    pub duration: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
}

impl NewTask {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Task title cannot be empty".to_string());
        }
        if self.title.chars().count() > validation::task::TITLE_MAX_LENGTH as usize {
            errors.push(format!(
                "Task title must be at most {} characters",
                validation::task::TITLE_MAX_LENGTH
            ));
        }
        if validation::validate_duration_minutes(self.duration).is_err() {
            errors.push(format!(
                "Duration must be between {} and {} minutes",
                validation::task::DURATION_MIN_MINUTES,
                validation::task::DURATION_MAX_MINUTES
            ));
        }
        if self.end_date != self.start_date + Duration::minutes(i64::from(self.duration)) {
            errors.push("End date must equal start date plus duration".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationErrors(errors))
        }
    }

    /// 新規タスクをモデルに変換する。ステータスは scheduled で始まる。
    pub fn into_model(self, now: DateTime<Utc>) -> task_model::Model {
        task_model::Model {
            id: Uuid::new_v4(),
            title: self.title,
            team_id: self.team_id,
            status: TaskStatus::Scheduled.to_string(),
            duration: self.duration,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub color: String,
}

impl NewTeam {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Team name cannot be empty".to_string());
        }
        if self.name.chars().count() > validation::team::NAME_MAX_LENGTH as usize {
            errors.push(format!(
                "Team name must be at most {} characters",
                validation::team::NAME_MAX_LENGTH
            ));
        }
        if !validation::HEX_COLOR_REGEX.is_match(&self.color) {
            errors.push("Color must be a hex code like #4f46e5".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationErrors(errors))
        }
    }

    pub fn into_model(self, now: DateTime<Utc>) -> team_model::Model {
        team_model::Model {
            id: Uuid::new_v4(),
            name: self.name,
            color: self.color,
            created_at: now,
            updated_at: now,
        }
    }
}

/// タスクの部分更新。None のフィールドは変更しない。
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub team_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub duration: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

impl TaskPatch {
    pub fn apply_to(self, task: &mut task_model::Model) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(team_id) = self.team_id {
            task.team_id = team_id;
        }
        if let Some(status) = self.status {
            task.status = status.to_string();
        }
        if let Some(duration) = self.duration {
            task.duration = duration;
        }
        if let Some(start_date) = self.start_date {
            task.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            task.end_date = end_date;
        }
        if let Some(location) = self.location {
            task.location = Some(location);
        }
    }
}

/// チームとタスクの永続化操作。実装はバックエンドごとに異なるが、
/// 呼び出し側からは同じ振る舞いになる。
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_teams(&self) -> AppResult<Vec<team_model::Model>>;
    async fn add_team(&self, team: NewTeam) -> AppResult<team_model::Model>;
    async fn find_team(&self, id: Uuid) -> AppResult<Option<team_model::Model>>;

    async fn list_tasks(&self) -> AppResult<Vec<task_model::Model>>;
    async fn add_task(&self, task: NewTask) -> AppResult<task_model::Model>;
    async fn find_task(&self, id: Uuid) -> AppResult<Option<task_model::Model>>;
    /// 対象が存在しない場合は Ok(None) を返す
    async fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
    ) -> AppResult<Option<task_model::Model>>;
}

/// 設定に従ってストレージバックエンドを初期化する
pub async fn connect(config: &Config) -> AppResult<Arc<dyn ScheduleStore>> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Local => {
            tracing::info!(
                dir = %config.local_store_dir.display(),
                "Using local file storage backend"
            );
            Ok(Arc::new(LocalStore::open(&config.local_store_dir)?))
        }
        StorageBackend::Database => {
            let database_url = config.database_url.as_deref().ok_or_else(|| {
                AppError::InternalServerError(
                    "DATABASE_URL is required for the database backend".to_string(),
                )
            })?;
            let db = db::create_db_pool(database_url).await?;
            tracing::info!("Using database storage backend");
            Ok(Arc::new(DatabaseStore::new(db)))
        }
    }
}
