use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewTask, NewTeam, ScheduleStore, TaskPatch};
use crate::domain::{task_model, team_model};
use crate::error::{AppError, AppResult};
use crate::utils::clock::{Clock, SystemClock};

const TEAMS_FILE: &str = "teams.json";
const TASKS_FILE: &str = "tasks.json";

/// JSONファイルにチームとタスクを保存するストア。
/// 書き込みが成功するまでメモリ上の状態は更新しない。
pub struct LocalStore {
    teams_path: PathBuf,
    tasks_path: PathBuf,
    clock: Arc<dyn Clock>,
    teams: RwLock<Vec<team_model::Model>>,
    tasks: RwLock<Vec<task_model::Model>>,
}

impl LocalStore {
    pub fn open(dir: &Path) -> AppResult<Self> {
        Self::open_with_clock(dir, Arc::new(SystemClock))
    }

    /// テストで時刻を固定するためのコンストラクタ
    pub fn open_with_clock(dir: &Path, clock: Arc<dyn Clock>) -> AppResult<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            AppError::StorageUnavailable(format!(
                "Failed to create storage directory {}: {e}",
                dir.display()
            ))
        })?;

        let teams_path = dir.join(TEAMS_FILE);
        let tasks_path = dir.join(TASKS_FILE);
        let teams = load_records(&teams_path)?;
        let tasks = load_records(&tasks_path)?;

        Ok(Self {
            teams_path,
            tasks_path,
            clock,
            teams: RwLock::new(teams),
            tasks: RwLock::new(tasks),
        })
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
            AppError::StorageUnavailable(format!("Corrupt document {}: {e}", path.display()))
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(AppError::StorageUnavailable(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

fn persist_records<T: Serialize>(path: &Path, records: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| {
        AppError::StorageUnavailable(format!("Failed to serialize {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|e| {
        AppError::StorageUnavailable(format!("Failed to write {}: {e}", path.display()))
    })
}

#[async_trait]
impl ScheduleStore for LocalStore {
    async fn list_teams(&self) -> AppResult<Vec<team_model::Model>> {
        Ok(self.teams.read().await.clone())
    }

    async fn add_team(&self, team: NewTeam) -> AppResult<team_model::Model> {
        team.validate()?;
        let model = team.into_model(self.clock.now());

        let mut guard = self.teams.write().await;
        let mut next = guard.clone();
        next.push(model.clone());
        persist_records(&self.teams_path, &next)?;
        *guard = next;
        Ok(model)
    }

    async fn find_team(&self, id: Uuid) -> AppResult<Option<team_model::Model>> {
        Ok(self
            .teams
            .read()
            .await
            .iter()
            .find(|team| team.id == id)
            .cloned())
    }

    async fn list_tasks(&self) -> AppResult<Vec<task_model::Model>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn add_task(&self, task: NewTask) -> AppResult<task_model::Model> {
        task.validate()?;
        let model = task.into_model(self.clock.now());

        let mut guard = self.tasks.write().await;
        let mut next = guard.clone();
        next.push(model.clone());
        persist_records(&self.tasks_path, &next)?;
        *guard = next;
        Ok(model)
    }

    async fn find_task(&self, id: Uuid) -> AppResult<Option<task_model::Model>> {
        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .find(|task| task.id == id)
            .cloned())
    }

    async fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
    ) -> AppResult<Option<task_model::Model>> {
        let mut guard = self.tasks.write().await;
        let mut next = guard.clone();

        let updated = match next.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                patch.apply_to(task);
                task.updated_at = self.clock.now();
                task.clone()
            }
            None => return Ok(None),
        };

        persist_records(&self.tasks_path, &next)?;
        *guard = next;
        Ok(Some(updated))
    }
}
