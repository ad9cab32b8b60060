use chrono::{DateTime, Duration, Utc};

use crate::utils::validation;

/// 開始時刻と所要時間（分）で表す半開区間 [start, end)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    duration_minutes: i32,
}

impl TimeRange {
    /// 負の時間と上限超過を拒否する。0分は空区間として許容する。
    pub fn new(start: DateTime<Utc>, duration_minutes: i32) -> Result<Self, String> {
        if duration_minutes < 0 {
            return Err(format!(
                "Duration must not be negative, got {duration_minutes}"
            ));
        }
        if duration_minutes > validation::task::DURATION_MAX_MINUTES {
            return Err(format!(
                "Duration must not exceed {} minutes, got {duration_minutes}",
                validation::task::DURATION_MAX_MINUTES
            ));
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn is_empty(&self) -> bool {
        self.duration_minutes == 0
    }

    /// 半開区間同士の重なり判定。端点が接するだけなら重ならない。
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.end() && other.start < self.end()
    }
}
