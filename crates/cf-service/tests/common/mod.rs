#![allow(dead_code)]

use cf_appwrite::MemoryStore;
use cf_core::NewSprint;
use cf_core::collections::{ROADMAP_ITEMS, TASK_DEPENDENCIES, TASKS};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;

pub const PROJECT: &str = "project-1";
pub const USER: &str = "user-1";

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Ten days, 2026-03-02 through 2026-03-12
pub fn new_sprint(name: &str) -> NewSprint {
    new_sprint_starting(name, utc(2026, 3, 2))
}

pub fn new_sprint_starting(name: &str, start: DateTime<Utc>) -> NewSprint {
    NewSprint {
        user_id: USER.to_string(),
        project_id: PROJECT.to_string(),
        name: name.to_string(),
        description: None,
        start_date: start,
        end_date: start + chrono::Duration::days(10),
        goals: vec!["Ship it".to_string()],
    }
}

pub async fn seed_task(store: &MemoryStore, id: &str, points: Option<f64>, completed_at: Option<DateTime<Utc>>) {
    store
        .seed(
            TASKS,
            json!({
                "$id": id,
                "projectId": PROJECT,
                "title": format!("Task {id}"),
                "completed": completed_at.is_some(),
                "estimatedTime": points,
                "completedAt": completed_at.map(|at| at.to_rfc3339()),
            }),
        )
        .await;
}

pub async fn seed_epic_task(store: &MemoryStore, id: &str, project_id: &str, epic_id: &str) {
    store
        .seed(
            TASKS,
            json!({
                "$id": id,
                "projectId": project_id,
                "epicId": epic_id,
                "title": format!("Task {id}"),
                "completed": false,
            }),
        )
        .await;
}

/// A task with no `projectId`, linked to its project only through the epic
pub async fn seed_epic_only_task(store: &MemoryStore, id: &str, epic_id: &str) {
    store
        .seed(
            TASKS,
            json!({
                "$id": id,
                "epicId": epic_id,
                "title": format!("Task {id}"),
                "completed": false,
            }),
        )
        .await;
}

pub async fn seed_roadmap_item(store: &MemoryStore, id: &str, project_id: &str, epic_id: &str) {
    store
        .seed(
            ROADMAP_ITEMS,
            json!({
                "$id": id,
                "projectId": project_id,
                "title": format!("Item {id}"),
                "epicId": epic_id,
            }),
        )
        .await;
}

pub async fn seed_dependency(store: &MemoryStore, id: &str, task_id: &str, depends_on: &str, kind: &str) {
    store
        .seed(
            TASK_DEPENDENCIES,
            json!({
                "$id": id,
                "taskId": task_id,
                "dependsOnTaskId": depends_on,
                "dependencyType": kind,
                "lag": 0,
            }),
        )
        .await;
}
