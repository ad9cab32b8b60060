// src/api/dto/calendar_dto.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task_dto::TaskDto;
use crate::domain::grid;

// --- Query DTO ---

#[derive(Deserialize, Debug)]
pub struct CalendarQueryDto {
    pub date: NaiveDate,
}

// --- Response DTOs ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SlotPositionDto {
    pub offset_px: f64,
    pub height_px: f64,
}

impl From<grid::SlotPosition> for SlotPositionDto {
    fn from(position: grid::SlotPosition) -> Self {
        Self {
            offset_px: position.offset_px,
            height_px: position.height_px,
        }
    }
}

/// スロット内に描画位置付きで配置されたタスク
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PositionedTaskDto {
    pub task: TaskDto,
    pub position: SlotPositionDto,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DayViewDto {
    pub date: NaiveDate,
    pub hours: Vec<DaySlotDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DaySlotDto {
    pub hour: u32,
    pub tasks: Vec<PositionedTaskDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeekViewDto {
    pub week_start: NaiveDate,
    pub days: Vec<NaiveDate>,
    pub bands: Vec<WeekBandDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeekBandDto {
    pub label: String,
    pub hours: Vec<WeekHourRowDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeekHourRowDto {
    pub hour: u32,
    pub cells: Vec<WeekCellDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeekCellDto {
    pub date: NaiveDate,
    pub tasks: Vec<PositionedTaskDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MonthViewDto {
    pub date: NaiveDate,
    pub cells: Vec<MonthCellDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MonthCellDto {
    pub date: NaiveDate,
    pub in_month: bool,
    pub tasks: Vec<TaskDto>,
}
