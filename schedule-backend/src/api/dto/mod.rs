pub mod calendar_dto;
pub mod task_dto;
pub mod team_dto;
