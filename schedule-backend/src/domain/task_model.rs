// src/domain/task_model.rs
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::task_status::TaskStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub team_id: Uuid,
    pub status: String,
    /// 所要時間（分）
    pub duration: i32,
    pub start_date: DateTime<Utc>,
    /// 常に start_date + duration。アプリケーション側で保証する。
    pub end_date: DateTime<Utc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_model::Entity",
        from = "Column::TeamId",
        to = "super::team_model::Column::Id"
    )]
    Team,
}

impl Related<super::team_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

impl Model {
    /// status カラムを列挙型として読む。不明な値は既定値にフォールバックする。
    pub fn task_status(&self) -> TaskStatus {
        self.status.parse().unwrap_or_default()
    }
}
