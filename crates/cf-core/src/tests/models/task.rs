use crate::tests::{date, done_task, open_task, utc};
use crate::models::task::DEFAULT_TASK_POINTS;

#[test]
fn test_points_uses_estimate() {
    assert_eq!(open_task("t1", Some(5.0)).points(), 5.0);
    assert_eq!(open_task("t1", Some(0.0)).points(), 0.0);
}

#[test]
fn test_points_defaults_when_missing_or_invalid() {
    assert_eq!(open_task("t1", None).points(), DEFAULT_TASK_POINTS);
    assert_eq!(open_task("t1", Some(-3.0)).points(), DEFAULT_TASK_POINTS);
    assert_eq!(open_task("t1", Some(f64::NAN)).points(), DEFAULT_TASK_POINTS);
}

#[test]
fn test_completed_by_respects_completion_day() {
    let task = done_task("t1", None, utc(2024, 3, 5));

    assert!(!task.completed_by(date(2024, 3, 4)));
    assert!(task.completed_by(date(2024, 3, 5)));
    assert!(task.completed_by(date(2024, 3, 6)));
}

#[test]
fn test_completed_without_timestamp_counts_from_start() {
    let mut task = open_task("t1", None);
    task.completed = true;

    assert!(task.completed_by(date(2000, 1, 1)));
}

#[test]
fn test_open_task_never_completed() {
    let mut task = open_task("t1", None);
    task.completed_at = Some(utc(2024, 3, 1));

    assert!(!task.completed_by(date(2024, 12, 31)));
}
