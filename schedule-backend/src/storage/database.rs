use async_trait::async_trait;
use sea_orm::DbConn;
use std::sync::Arc;
use uuid::Uuid;

use super::{NewTask, NewTeam, ScheduleStore, TaskPatch};
use crate::domain::{task_model, team_model};
use crate::error::AppResult;
use crate::repository::task_repository::TaskRepository;
use crate::repository::team_repository::TeamRepository;
use crate::utils::clock::{Clock, SystemClock};

/// SeaORM経由でデータベースに保存するストア
pub struct DatabaseStore {
    task_repo: TaskRepository,
    team_repo: TeamRepository,
    clock: Arc<dyn Clock>,
}

impl DatabaseStore {
    pub fn new(db: DbConn) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    pub fn with_clock(db: DbConn, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_repo: TaskRepository::new(db.clone()),
            team_repo: TeamRepository::new(db),
            clock,
        }
    }
}

#[async_trait]
impl ScheduleStore for DatabaseStore {
    async fn list_teams(&self) -> AppResult<Vec<team_model::Model>> {
        Ok(self.team_repo.find_all().await?)
    }

    async fn add_team(&self, team: NewTeam) -> AppResult<team_model::Model> {
        team.validate()?;
        Ok(self.team_repo.create(team, self.clock.now()).await?)
    }

    async fn find_team(&self, id: Uuid) -> AppResult<Option<team_model::Model>> {
        Ok(self.team_repo.find_by_id(id).await?)
    }

    async fn list_tasks(&self) -> AppResult<Vec<task_model::Model>> {
        Ok(self.task_repo.find_all().await?)
    }

    async fn add_task(&self, task: NewTask) -> AppResult<task_model::Model> {
        task.validate()?;
        Ok(self.task_repo.create(task, self.clock.now()).await?)
    }

    async fn find_task(&self, id: Uuid) -> AppResult<Option<task_model::Model>> {
        Ok(self.task_repo.find_by_id(id).await?)
    }

    async fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
    ) -> AppResult<Option<task_model::Model>> {
        Ok(self.task_repo.update(id, patch, self.clock.now()).await?)
    }
}
