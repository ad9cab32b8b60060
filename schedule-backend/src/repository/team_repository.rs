// src/repository/team_repository.rs
use chrono::{DateTime, Utc};
use sea_orm::{entity::*, query::*, DbConn, DbErr, Set};
use uuid::Uuid;

use crate::domain::team_model::{self, ActiveModel as TeamActiveModel, Entity as TeamEntity};
use crate::storage::NewTeam;

pub struct TeamRepository {
    db: DbConn,
}

impl TeamRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<team_model::Model>, DbErr> {
        TeamEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<team_model::Model>, DbErr> {
        TeamEntity::find()
            .order_by_asc(team_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        payload: NewTeam,
        now: DateTime<Utc>,
    ) -> Result<team_model::Model, DbErr> {
        let new_team = TeamActiveModel {
            name: Set(payload.name),
            color: Set(payload.color),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        new_team.insert(&self.db).await
    }
}
