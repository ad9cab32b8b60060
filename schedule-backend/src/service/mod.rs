pub mod schedule_service;
pub mod team_service;

pub use schedule_service::{SchedulePolicy, ScheduleService};
pub use team_service::TeamService;
