// src/api/dto/team_dto.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::team_model;
use crate::utils::validation;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateTeamDto {
    #[validate(
        length(
            min = validation::team::NAME_MIN_LENGTH,
            max = validation::team::NAME_MAX_LENGTH,
            message = "Team name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_team_name)
    )]
    pub name: String,

    #[validate(custom(function = validation::validate_team_color))]
    pub color: String,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<team_model::Model> for TeamDto {
    fn from(model: team_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            color: model.color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_team_dto_validation() {
        let dto = CreateTeamDto {
            name: "Team A".to_string(),
            color: "#4f46e5".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto = CreateTeamDto {
            name: String::new(),
            color: "blue".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("color"));
    }
}
