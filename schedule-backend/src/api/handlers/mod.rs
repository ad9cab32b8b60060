pub mod calendar_handler;
pub mod task_handler;
pub mod team_handler;
