pub mod conflict;
pub mod grid;
pub mod task_model;
pub mod task_status;
pub mod team_model;
pub mod time_range;

pub use task_status::TaskStatus;
pub use time_range::TimeRange;
