// src/service/schedule_service.rs

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::calendar_dto::{
    DaySlotDto, DayViewDto, MonthCellDto, MonthViewDto, PositionedTaskDto, WeekBandDto,
    WeekCellDto, WeekHourRowDto, WeekViewDto,
};
use crate::api::dto::task_dto::{CreateTaskDto, TaskDto, TaskFilterDto, UpdateTaskDto};
use crate::domain::conflict;
use crate::domain::grid;
use crate::domain::task_model;
use crate::domain::task_status::TaskStatus;
use crate::domain::time_range::TimeRange;
use crate::error::{AppError, AppResult};
use crate::storage::{NewTask, ScheduleStore, TaskPatch};

/// スケジューリングの方針。既定では重なりを許可し、
/// 重なり判定は /conflicts での照会にのみ使われる。
#[derive(Debug, Clone, Copy)]
pub struct SchedulePolicy {
    pub allow_overlap: bool,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            allow_overlap: true,
        }
    }
}

pub struct ScheduleService {
    store: Arc<dyn ScheduleStore>,
    policy: SchedulePolicy,
}

impl ScheduleService {
    pub fn new(store: Arc<dyn ScheduleStore>) -> Self {
        Self::with_policy(store, SchedulePolicy::default())
    }

    pub fn with_policy(store: Arc<dyn ScheduleStore>, policy: SchedulePolicy) -> Self {
        Self { store, policy }
    }

    // --- タスク CRUD ---

    pub async fn create_task(&self, payload: CreateTaskDto) -> AppResult<TaskDto> {
        payload.validate()?;

        let team = self
            .store
            .find_team(payload.team_id)
            .await?
            .ok_or_else(|| {
                AppError::ValidationError(format!("Team not found: {}", payload.team_id))
            })?;

        let range = TimeRange::new(payload.start_date, payload.duration)
            .map_err(AppError::ValidationError)?;
        self.ensure_no_conflict(&range, team.id, None).await?;

        let created = self
            .store
            .add_task(NewTask {
                title: payload.title,
                team_id: team.id,
                duration: payload.duration,
                start_date: range.start(),
                end_date: range.end(),
                location: payload.location,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn get_task(&self, id: Uuid) -> AppResult<TaskDto> {
        let task = self
            .store
            .find_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {id}")))?;
        Ok(task.into())
    }

    pub async fn list_tasks(&self, filter: TaskFilterDto) -> AppResult<Vec<TaskDto>> {
        let tasks = self.store.list_tasks().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| filter.team_id.map_or(true, |team| task.team_id == team))
            .filter(|task| filter.from.map_or(true, |from| task.start_date >= from))
            .filter(|task| filter.to.map_or(true, |to| task.start_date < to))
            .map(Into::into)
            .collect())
    }

    pub async fn update_task(&self, id: Uuid, payload: UpdateTaskDto) -> AppResult<TaskDto> {
        payload.validate()?;
        if payload.is_empty() {
            return Err(AppError::ValidationError(
                "Update payload cannot be empty".to_string(),
            ));
        }

        let task = self
            .store
            .find_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {id}")))?;

        let status = match payload.status {
            Some(raw) => Some(raw.parse::<TaskStatus>().map_err(AppError::BadRequest)?),
            None => None,
        };

        if let Some(team_id) = payload.team_id {
            if self.store.find_team(team_id).await?.is_none() {
                return Err(AppError::ValidationError(format!(
                    "Team not found: {team_id}"
                )));
            }
        }

        let new_start = payload.start_date.unwrap_or(task.start_date);
        let new_duration = payload.duration.unwrap_or(task.duration);
        let time_changed = new_start != task.start_date || new_duration != task.duration;
        let team_changed = payload.team_id.map_or(false, |team| team != task.team_id);

        let range =
            TimeRange::new(new_start, new_duration).map_err(AppError::ValidationError)?;
        if time_changed || team_changed {
            let target_team = payload.team_id.unwrap_or(task.team_id);
            self.ensure_no_conflict(&range, target_team, Some(id)).await?;
        }

        let patch = TaskPatch {
            title: payload.title,
            team_id: payload.team_id,
            status,
            duration: payload.duration,
            start_date: payload.start_date,
            // 時刻か所要時間が変わったら end_date = start + duration を取り直す
            end_date: if time_changed { Some(range.end()) } else { None },
            location: payload.location,
        };

        let updated = self
            .store
            .update_task(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {id}")))?;
        Ok(updated.into())
    }

    /// タスクを新しい開始時刻へ移動する。所要時間は変わらない。
    pub async fn move_task(&self, id: Uuid, new_start: DateTime<Utc>) -> AppResult<TaskDto> {
        let task = self
            .store
            .find_task(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {id}")))?;

        let range =
            TimeRange::new(new_start, task.duration).map_err(AppError::ValidationError)?;
        self.ensure_no_conflict(&range, task.team_id, Some(id)).await?;

        let patch = TaskPatch {
            start_date: Some(range.start()),
            end_date: Some(range.end()),
            ..Default::default()
        };
        let updated = self
            .store
            .update_task(id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task not found: {id}")))?;
        Ok(updated.into())
    }

    /// タスクを日付と時刻で指定したスロットの先頭（分は00）へ移動する
    pub async fn move_task_to_slot(
        &self,
        id: Uuid,
        date: NaiveDate,
        hour: u32,
    ) -> AppResult<TaskDto> {
        let start = grid::slot_start(date, hour)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid hour: {hour}")))?;
        self.move_task(id, start).await
    }

    // --- 重なり判定 ---

    /// 指定区間と重なるタスクを返す。exclude で自分自身を除外できる。
    pub async fn check_conflicts(
        &self,
        start: DateTime<Utc>,
        duration: i32,
        team_id: Option<Uuid>,
        exclude: Option<Uuid>,
    ) -> AppResult<Vec<TaskDto>> {
        let range = TimeRange::new(start, duration).map_err(AppError::ValidationError)?;
        let conflicts = self.conflicting_tasks(&range, team_id, exclude).await?;
        Ok(conflicts.into_iter().map(Into::into).collect())
    }

    async fn conflicting_tasks(
        &self,
        range: &TimeRange,
        team_id: Option<Uuid>,
        exclude: Option<Uuid>,
    ) -> AppResult<Vec<task_model::Model>> {
        let tasks = self.store.list_tasks().await?;
        Ok(conflict::find_conflicts(&tasks, range, team_id)
            .into_iter()
            .filter(|task| exclude.map_or(true, |excluded| task.id != excluded))
            .cloned()
            .collect())
    }

    async fn ensure_no_conflict(
        &self,
        range: &TimeRange,
        team_id: Uuid,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        if self.policy.allow_overlap {
            return Ok(());
        }
        let conflicts = self.conflicting_tasks(range, Some(team_id), exclude).await?;
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(AppError::Conflict(format!(
                "{} overlapping task(s) for this team",
                conflicts.len()
            )))
        }
    }

    // --- カレンダービュー ---

    pub async fn day_view(&self, date: NaiveDate) -> AppResult<DayViewDto> {
        let tasks = self.store.list_tasks().await?;
        let hours = grid::day_hours()
            .map(|hour| DaySlotDto {
                hour,
                tasks: positioned_tasks(&tasks, date, hour),
            })
            .collect();
        Ok(DayViewDto { date, hours })
    }

    pub async fn week_view(&self, date: NaiveDate) -> AppResult<WeekViewDto> {
        let tasks = self.store.list_tasks().await?;
        let days = grid::week_days(date);
        let bands = grid::WEEK_BANDS
            .iter()
            .map(|band| WeekBandDto {
                label: band.label.to_string(),
                hours: band
                    .hours()
                    .map(|hour| WeekHourRowDto {
                        hour,
                        cells: days
                            .iter()
                            .map(|&day| WeekCellDto {
                                date: day,
                                tasks: positioned_tasks(&tasks, day, hour),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Ok(WeekViewDto {
            week_start: grid::week_start(date),
            days,
            bands,
        })
    }

    pub async fn month_view(&self, date: NaiveDate) -> AppResult<MonthViewDto> {
        let tasks = self.store.list_tasks().await?;
        let cells = grid::month_grid(date)
            .into_iter()
            .map(|cell| MonthCellDto {
                date: cell.date,
                in_month: cell.in_month,
                tasks: grid::tasks_starting_on(&tasks, cell.date)
                    .into_iter()
                    .cloned()
                    .map(Into::into)
                    .collect(),
            })
            .collect();
        Ok(MonthViewDto { date, cells })
    }
}

fn positioned_tasks(
    tasks: &[task_model::Model],
    day: NaiveDate,
    hour: u32,
) -> Vec<PositionedTaskDto> {
    tasks
        .iter()
        .filter_map(|task| {
            grid::slot_position(task, day, hour).map(|position| PositionedTaskDto {
                task: task.clone().into(),
                position: position.into(),
            })
        })
        .collect()
}
