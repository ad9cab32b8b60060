// src/repository/task_repository.rs
use chrono::{DateTime, Utc};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

use crate::domain::task_model::{self, ActiveModel as TaskActiveModel, Entity as TaskEntity};
use crate::domain::task_status::TaskStatus;
use crate::storage::{NewTask, TaskPatch};

pub struct TaskRepository {
    db: DbConn,
}

impl TaskRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<task_model::Model>, DbErr> {
        TaskEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .order_by_asc(task_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        payload: NewTask,
        now: DateTime<Utc>,
    ) -> Result<task_model::Model, DbErr> {
        let new_task = TaskActiveModel {
            title: Set(payload.title),
            team_id: Set(payload.team_id),
            status: Set(TaskStatus::Scheduled.to_string()),
            duration: Set(payload.duration),
            start_date: Set(payload.start_date),
            end_date: Set(payload.end_date),
            location: Set(payload.location),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        new_task.insert(&self.db).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<task_model::Model>, DbErr> {
        let task = match TaskEntity::find_by_id(id).one(&self.db).await? {
            Some(t) => t,
            None => return Ok(None), // タスクが見つからなければ None を返す
        };

        let mut active_model: TaskActiveModel = task.clone().into();

        if let Some(title) = patch.title {
            active_model.title = Set(title);
        }
        if let Some(team_id) = patch.team_id {
            active_model.team_id = Set(team_id);
        }
        if let Some(status) = patch.status {
            active_model.status = Set(status.to_string());
        }
        if let Some(duration) = patch.duration {
            active_model.duration = Set(duration);
        }
        if let Some(start_date) = patch.start_date {
            active_model.start_date = Set(start_date);
        }
        if let Some(end_date) = patch.end_date {
            active_model.end_date = Set(end_date);
        }
        if let Some(location) = patch.location {
            active_model.location = Set(Some(location));
        }

        // 変更の有無に関わらず updated_at を進める
        active_model.updated_at = Set(now);

        Ok(Some(active_model.update(&self.db).await?))
    }
}
