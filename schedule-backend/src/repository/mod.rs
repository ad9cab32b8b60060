pub mod task_repository;
pub mod team_repository;
