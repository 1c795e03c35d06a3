use crate::stats::sum_points;
use crate::{Sprint, Task};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BurndownPoint {
    pub date: NaiveDate,
    /// Remaining points on a straight line from the total down to zero
    pub ideal: f64,
    /// Remaining points as recorded; `None` for days after today
    pub actual: Option<f64>,
}

/// One point per day from the sprint's start date to its end date, inclusive.
pub fn generate_burndown(sprint: &Sprint, tasks: &[Task], today: NaiveDate) -> Vec<BurndownPoint> {
    let total_points = sum_points(tasks);
    let total_days = sprint.total_days();
    let start = sprint.start_date.date_naive();
    let end = sprint.end_date.date_naive();

    (0..=total_days)
        .filter_map(|i| {
            // A same-day sprint still has two points; both carry the end date
            let date = start.checked_add_days(Days::new(i as u64))?.min(end);
            // total_points - (total_points / total_days) * i, exact at both ends
            let ideal = (total_points * (total_days - i) as f64 / total_days as f64).max(0.0);
            let actual = (date <= today).then(|| {
                total_points - sum_points(tasks.iter().filter(|t| t.completed_by(date)))
            });
            Some(BurndownPoint {
                date,
                ideal,
                actual,
            })
        })
        .collect()
}
