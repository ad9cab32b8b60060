// 共通バリデーション定数と関数

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// タスク関連の制約値
pub mod task {
    pub const TITLE_MIN_LENGTH: u64 = 1;
    pub const TITLE_MAX_LENGTH: u64 = 200;
    pub const LOCATION_MAX_LENGTH: u64 = 200;
    pub const DURATION_MIN_MINUTES: i32 = 15;
    pub const DURATION_MAX_MINUTES: i32 = 480;
}

/// チーム関連の制約値
pub mod team {
    pub const NAME_MIN_LENGTH: u64 = 1;
    pub const NAME_MAX_LENGTH: u64 = 100;
}

pub static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid hex color regex"));

/// 空文字列と空白のみの文字列を拒否する
pub fn validate_not_empty_or_whitespace(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty_or_whitespace"));
    }
    Ok(())
}

pub fn validate_task_title(title: &str) -> Result<(), ValidationError> {
    validate_not_empty_or_whitespace(title)?;
    if title.contains('\0') || title.contains('\r') || title.contains('\n') {
        return Err(ValidationError::new("invalid_characters"));
    }
    Ok(())
}

pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    validate_not_empty_or_whitespace(name)
}

pub fn validate_team_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR_REGEX.is_match(color) {
        let mut error = ValidationError::new("invalid_hex_color");
        error.message = Some("Color must be a hex code like #4f46e5".into());
        return Err(error);
    }
    Ok(())
}

pub fn validate_duration_minutes(duration: i32) -> Result<(), ValidationError> {
    if !(task::DURATION_MIN_MINUTES..=task::DURATION_MAX_MINUTES).contains(&duration) {
        return Err(ValidationError::new("duration_out_of_range"));
    }
    Ok(())
}
