use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewTask, NewTeam, ScheduleStore, TaskPatch};
use crate::domain::{task_model, team_model};
use crate::error::AppResult;
use crate::utils::clock::{Clock, SystemClock};

/// プロセス内に状態を持つストア。再起動でデータは消える。
pub struct InMemoryStore {
    clock: Arc<dyn Clock>,
    teams: RwLock<Vec<team_model::Model>>,
    tasks: RwLock<Vec<task_model::Model>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// テストで時刻を固定するためのコンストラクタ
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            teams: RwLock::new(Vec::new()),
            tasks: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn list_teams(&self) -> AppResult<Vec<team_model::Model>> {
        Ok(self.teams.read().await.clone())
    }

    async fn add_team(&self, team: NewTeam) -> AppResult<team_model::Model> {
        team.validate()?;
        let model = team.into_model(self.clock.now());
        self.teams.write().await.push(model.clone());
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
        self.tasks.write().await.push(model.clone());
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
        let mut tasks = self.tasks.write().await;
        let task = match tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task,
            None => return Ok(None),
        };
        patch.apply_to(task);
        task.updated_at = self.clock.now();
        Ok(Some(task.clone()))
    }
}
