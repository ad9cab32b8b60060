// src/service/team_service.rs

use std::sync::Arc;
use validator::Validate;

use crate::api::dto::team_dto::{CreateTeamDto, TeamDto};
use crate::error::AppResult;
use crate::storage::{NewTeam, ScheduleStore};

/// 初期投入するチーム（名前と表示色）
const DEFAULT_TEAMS: [(&str, &str); 2] = [("Team A", "#4f46e5"), ("Team B", "#0891b2")];

pub struct TeamService {
    store: Arc<dyn ScheduleStore>,
}

impl TeamService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self { store }
    }

    pub async fn list_teams(&self) -> AppResult<Vec<TeamDto>> {
        let teams = self.store.list_teams().await?;
        Ok(teams.into_iter().map(Into::into).collect())
    }

    pub async fn create_team(&self, payload: CreateTeamDto) -> AppResult<TeamDto> {
        payload.validate()?;
        let created = self
            .store
            .add_team(NewTeam {
                name: payload.name,
                color: payload.color,
            })
            .await?;
        Ok(created.into())
    }

    /// チームが1つもない場合に既定のチームを投入する
    pub async fn ensure_default_teams(&self) -> AppResult<()> {
        if !self.store.list_teams().await?.is_empty() {
            return Ok(());
        }
        for (name, color) in DEFAULT_TEAMS {
            self.store
                .add_team(NewTeam {
                    name: name.to_string(),
                    color: color.to_string(),
                })
                .await?;
        }
        tracing::info!("Seeded default teams");
        Ok(())
    }
}
