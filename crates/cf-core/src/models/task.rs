use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Points counted for a task that carries no estimate.
pub const DEFAULT_TASK_POINTS: f64 = 1.0;

/// The subset of a task document the sprint and roadmap logic reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "$id")]
    pub id: String,

    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub epic_id: Option<String>,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub estimated_time: Option<f64>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
}

impl Task {
    pub fn points(&self) -> f64 {
        self.estimated_time
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(DEFAULT_TASK_POINTS)
    }

    /// True once the task is completed and its completion day is not after `day`.
    /// A completed task with no timestamp counts as done from the start.
    pub fn completed_by(&self, day: NaiveDate) -> bool {
        if !self.completed {
            return false;
        }
        match self.completed_at {
            Some(at) => at.date_naive() <= day,
            None => true,
        }
    }
}
