// カレンダー表示のグリッド計算。日・週・月ビューの座標と日付範囲を担当する。

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Timelike, Utc};

use super::task_model;

/// 1時間スロットの描画高さ（ピクセル）
pub const SLOT_HEIGHT_PX: f64 = 60.0;

/// 日ビューの先頭時刻
pub const DAY_START_HOUR: u32 = 4;
/// 日ビューの末尾時刻（この時刻を含む）
pub const DAY_END_HOUR: u32 = 20;

/// 週ビューに表示する日数。月曜から土曜まで。
pub const WEEK_VISIBLE_DAYS: i64 = 6;

/// 週ビューの時間帯。start_hour から end_hour までの各時刻を含む。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub label: &'static str,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Band {
    pub fn hours(&self) -> std::ops::RangeInclusive<u32> {
        self.start_hour..=self.end_hour
    }
}

/// 週ビューの時間帯一覧。12時台はどの帯にも含まれない。
pub const WEEK_BANDS: [Band; 2] = [
    Band {
        label: "morning",
        start_hour: 4,
        end_hour: 11,
    },
    Band {
        label: "afternoon",
        start_hour: 13,
        end_hour: 19,
    },
];

/// 日ビューの時刻一覧（4時から20時まで）
pub fn day_hours() -> std::ops::RangeInclusive<u32> {
    DAY_START_HOUR..=DAY_END_HOUR
}

/// 指定日を含む週の月曜日
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// 指定日を含む週の表示対象日（月曜から土曜）
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..WEEK_VISIBLE_DAYS)
        .map(|offset| start + Duration::days(offset))
        .collect()
}

/// スロット内でのタスクの描画位置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPosition {
    pub offset_px: f64,
    pub height_px: f64,
}

/// タスクが指定日・指定時刻のスロットで始まる場合の描画位置を返す。
/// 高さはスロット1つ分を上限とし、スロット先頭からの描画になる。
pub fn slot_position(task: &task_model::Model, day: NaiveDate, hour: u32) -> Option<SlotPosition> {
    if task.start_date.date_naive() != day || task.start_date.hour() != hour {
        return None;
    }
    Some(SlotPosition {
        offset_px: 0.0,
        height_px: f64::from(task.duration).min(60.0) / 60.0 * SLOT_HEIGHT_PX,
    })
}

/// 月グリッドの1マス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// 指定日の属する月のグリッド。月初を含む週の月曜から
/// 月末を含む週の日曜まで、常に7の倍数のマスを返す。
pub fn month_grid(date: NaiveDate) -> Vec<MonthCell> {
    let first_of_month = date - Duration::days(i64::from(date.day0()));
    let last_of_month = first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first_of_month);

    let grid_start = week_start(first_of_month);
    let grid_end = week_start(last_of_month) + Duration::days(6);

    let mut cells = Vec::new();
    let mut cursor = grid_start;
    while cursor <= grid_end {
        cells.push(MonthCell {
            date: cursor,
            in_month: cursor.month() == date.month() && cursor.year() == date.year(),
        });
        cursor = cursor + Duration::days(1);
    }
    cells
}

/// 日付と時刻からスロット先頭のUTC時刻を作る。存在しない時刻は None。
pub fn slot_start(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    date.and_hms_opt(hour, 0, 0).map(|naive| naive.and_utc())
}

/// 指定日に開始するタスクを抽出する（月ビュー用）
pub fn tasks_starting_on<'a>(
    tasks: &'a [task_model::Model],
    date: NaiveDate,
) -> Vec<&'a task_model::Model> {
    tasks
        .iter()
        .filter(|task| task.start_date.date_naive() == date)
        .collect()
}
