use uuid::Uuid;

use super::task_model;
use super::time_range::TimeRange;

/// 候補区間と重なるタスクを返す。
///
/// team_id が指定された場合はそのチームのタスクだけを対象にする。
/// ステータスに関わらず全タスクが時間を占有する扱いで、
/// 入力の並び順は保たれる。空区間は何とも重ならない。
pub fn find_conflicts<'a>(
    tasks: &'a [task_model::Model],
    candidate: &TimeRange,
    team_id: Option<Uuid>,
) -> Vec<&'a task_model::Model> {
    if candidate.is_empty() {
        return Vec::new();
    }
    tasks
        .iter()
        .filter(|task| team_id.map_or(true, |team| task.team_id == team))
        .filter(|task| task.start_date < candidate.end() && candidate.start() < task.end_date)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 3, hour, minute, 0).unwrap()
    }

    fn task(team_id: Uuid, start: DateTime<Utc>, duration: i32) -> task_model::Model {
        task_model::Model {
            id: Uuid::new_v4(),
            title: "Standup".to_string(),
            team_id,
            status: "scheduled".to_string(),
            duration,
            start_date: start,
            end_date: start + Duration::minutes(i64::from(duration)),
            location: None,
            created_at: at(8, 0),
            updated_at: at(8, 0),
        }
    }

    #[test]
    fn test_finds_overlapping_tasks() {
        let team = Uuid::new_v4();
        let tasks = vec![task(team, at(9, 0), 60), task(team, at(11, 0), 60)];
        let candidate = TimeRange::new(at(9, 30), 60).unwrap();

        let conflicts = find_conflicts(&tasks, &candidate, None);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].id, tasks[0].id);
    }

    #[test]
    fn test_touching_boundary_is_not_a_conflict() {
        let team = Uuid::new_v4();
        let tasks = vec![task(team, at(9, 0), 60)];

        let after = TimeRange::new(at(10, 0), 60).unwrap();
        assert!(find_conflicts(&tasks, &after, None).is_empty());

        let before = TimeRange::new(at(8, 0), 60).unwrap();
        assert!(find_conflicts(&tasks, &before, None).is_empty());
    }

    #[test]
    fn test_team_filter_limits_scope() {
        let team_a = Uuid::new_v4();
        let team_b = Uuid::new_v4();
        let tasks = vec![task(team_a, at(9, 0), 60), task(team_b, at(9, 0), 60)];
        let candidate = TimeRange::new(at(9, 0), 30).unwrap();

        let all = find_conflicts(&tasks, &candidate, None);
        assert_eq!(all.len(), 2);

        let scoped = find_conflicts(&tasks, &candidate, Some(team_a));
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].team_id, team_a);
    }

    #[test]
    fn test_empty_candidate_has_no_conflicts() {
        let team = Uuid::new_v4();
        let tasks = vec![task(team, at(9, 0), 60)];
        let candidate = TimeRange::new(at(9, 30), 0).unwrap();
        assert!(find_conflicts(&tasks, &candidate, None).is_empty());
    }

    #[test]
    fn test_input_order_is_preserved() {
        let team = Uuid::new_v4();
        let tasks = vec![
            task(team, at(11, 0), 60),
            task(team, at(9, 0), 60),
            task(team, at(10, 0), 60),
        ];
        let candidate = TimeRange::new(at(9, 0), 180).unwrap();

        let conflicts = find_conflicts(&tasks, &candidate, None);
        let ids: Vec<_> = conflicts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![tasks[0].id, tasks[1].id, tasks[2].id]);
    }
}
