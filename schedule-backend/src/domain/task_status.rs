use serde::{Deserialize, Serialize};

/// タスクの状態。遷移は自由で、どの状態からどの状態へも変更できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Draft,
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Draft => "draft",
            TaskStatus::Scheduled => "scheduled",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
        }
    }

    pub fn all() -> [TaskStatus; 4] {
        [
            TaskStatus::Draft,
            TaskStatus::Scheduled,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
        ]
    }

    /// 完了・中止済みのタスクかどうか
    pub fn is_finished(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(TaskStatus::Draft),
            "scheduled" => Ok(TaskStatus::Scheduled),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(format!(
                "Invalid task status: '{s}'. Valid statuses are: draft, scheduled, completed, cancelled"
            )),
        }
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_all_statuses() {
        assert_eq!("draft".parse::<TaskStatus>().unwrap(), TaskStatus::Draft);
        assert_eq!(
            "scheduled".parse::<TaskStatus>().unwrap(),
            TaskStatus::Scheduled
        );
        assert_eq!(
            "completed".parse::<TaskStatus>().unwrap(),
            TaskStatus::Completed
        );
        assert_eq!(
            "cancelled".parse::<TaskStatus>().unwrap(),
            TaskStatus::Cancelled
        );
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("DRAFT".parse::<TaskStatus>().unwrap(), TaskStatus::Draft);
        assert_eq!(
            "Scheduled".parse::<TaskStatus>().unwrap(),
            TaskStatus::Scheduled
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_status() {
        let err = "done".parse::<TaskStatus>().unwrap_err();
        assert!(err.contains("Invalid task status"));
        assert!(err.contains("done"));
    }

    #[test]
    fn test_display_round_trip() {
        for status in TaskStatus::all() {
            assert_eq!(status.to_string().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_default_is_scheduled() {
        assert_eq!(TaskStatus::default(), TaskStatus::Scheduled);
    }

    #[test]
    fn test_is_finished() {
        assert!(!TaskStatus::Draft.is_finished());
        assert!(!TaskStatus::Scheduled.is_finished());
        assert!(TaskStatus::Completed.is_finished());
        assert!(TaskStatus::Cancelled.is_finished());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&TaskStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
        let status: TaskStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, TaskStatus::Cancelled);
    }

    #[test]
    fn test_string_conversions() {
        let s: String = TaskStatus::Completed.into();
        assert_eq!(s, "completed");
        assert_eq!(
            TaskStatus::try_from("draft").unwrap(),
            TaskStatus::Draft
        );
        assert_eq!(
            TaskStatus::try_from("scheduled".to_string()).unwrap(),
            TaskStatus::Scheduled
        );
    }
}
