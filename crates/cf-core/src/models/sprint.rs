use crate::{CoreError, CoreResult, SprintStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_SPRINT_NAME_LENGTH: usize = 255;

/// A time-boxed grouping of tasks, stored as a document in the `sprints` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    pub project_id: String,

    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub status: SprintStatus,

    // Progress
    #[serde(default)]
    pub velocity: f64,
    #[serde(default)]
    pub completed_points: f64,
    #[serde(default)]
    pub total_points: f64,

    #[serde(default)]
    pub task_ids: Vec<String>,

    // Document metadata, assigned by the store
    #[serde(rename = "$createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "$updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a sprint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSprint {
    pub user_id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SprintUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub goals: Option<Vec<String>>,
    pub status: Option<SprintStatus>,
}

impl NewSprint {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        validate_name(&self.name)?;
        if self.project_id.trim().is_empty() {
            return Err(CoreError::validation("projectId", "Project ID is required"));
        }
        validate_date_range(self.start_date, self.end_date)
    }
}

impl Sprint {
    /// Build a fresh sprint in the `planning` state with zeroed progress.
    pub fn from_new(id: String, new: NewSprint) -> Self {
        Self {
            id,
            user_id: new.user_id,
            project_id: new.project_id,
            name: new.name.trim().to_string(),
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            goals: new.goals,
            status: SprintStatus::Planning,
            velocity: 0.0,
            completed_points: 0.0,
            total_points: 0.0,
            task_ids: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Apply a partial update, validating the resulting sprint as a whole.
    #[track_caller]
    pub fn apply(&mut self, update: SprintUpdate) -> CoreResult<()> {
        let start_date = update.start_date.unwrap_or(self.start_date);
        let end_date = update.end_date.unwrap_or(self.end_date);
        validate_date_range(start_date, end_date)?;

        if let Some(ref name) = update.name {
            validate_name(name)?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(goals) = update.goals {
            self.goals = goals;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.start_date = start_date;
        self.end_date = end_date;

        Ok(())
    }

    /// Whole calendar days from start to end, never less than 1.
    pub fn total_days(&self) -> i64 {
        (self.end_date.date_naive() - self.start_date.date_naive())
            .num_days()
            .max(1)
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    /// Returns false if the task was already part of the sprint.
    pub fn add_task(&mut self, task_id: &str) -> bool {
        if self.contains_task(task_id) {
            return false;
        }
        self.task_ids.push(task_id.to_string());
        true
    }

    /// Returns false if the task was not part of the sprint.
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| id != task_id);
        self.task_ids.len() != before
    }
}

#[track_caller]
fn validate_name(name: &str) -> CoreResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("name", "Sprint name is required"));
    }
    if trimmed.chars().count() > MAX_SPRINT_NAME_LENGTH {
        return Err(CoreError::validation(
            "name",
            format!("Sprint name exceeds {MAX_SPRINT_NAME_LENGTH} characters"),
        ));
    }
    Ok(())
}

#[track_caller]
fn validate_date_range(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> CoreResult<()> {
    if end_date < start_date {
        return Err(CoreError::validation(
            "endDate",
            format!(
                "End date {} is before start date {}",
                end_date.to_rfc3339(),
                start_date.to_rfc3339()
            ),
        ));
    }
    Ok(())
}
