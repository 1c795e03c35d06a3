use crate::stats::sum_points;
use crate::{Sprint, Task};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    /// Percentage in `[0, 100]`
    pub completion_rate: f64,

    pub total_points: f64,
    pub completed_points: f64,
    pub remaining_points: f64,

    pub total_days: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,

    /// Completed points per elapsed day
    pub velocity: f64,
}

/// Derive progress figures for `sprint` from its tasks as of `today`.
pub fn calculate_sprint_stats(sprint: &Sprint, tasks: &[Task], today: NaiveDate) -> SprintStats {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.completed).count();

    let completion_rate = if total_tasks == 0 {
        0.0
    } else {
        completed_tasks as f64 / total_tasks as f64 * 100.0
    };

    let total_points = sum_points(tasks);
    let completed_points = sum_points(tasks.iter().filter(|t| t.completed));

    let total_days = sprint.total_days();
    let days_elapsed = (today - sprint.start_date.date_naive())
        .num_days()
        .clamp(0, total_days);

    let velocity = if days_elapsed == 0 {
        0.0
    } else {
        completed_points / days_elapsed as f64
    };

    SprintStats {
        total_tasks,
        completed_tasks,
        completion_rate,
        total_points,
        completed_points,
        remaining_points: total_points - completed_points,
        total_days,
        days_elapsed,
        days_remaining: total_days - days_elapsed,
        velocity,
    }
}
