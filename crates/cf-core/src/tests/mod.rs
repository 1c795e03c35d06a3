mod models;
mod property_tests;
mod sprint_stats;

use crate::{NewSprint, RoadmapItem, Sprint, Task, TaskDependency};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub(crate) fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn new_sprint(start: DateTime<Utc>, end: DateTime<Utc>) -> NewSprint {
    NewSprint {
        user_id: "user-1".to_string(),
        project_id: "project-1".to_string(),
        name: "Sprint 1".to_string(),
        description: None,
        start_date: start,
        end_date: end,
        goals: vec!["Ship onboarding".to_string()],
    }
}

pub(crate) fn sprint(start: DateTime<Utc>, end: DateTime<Utc>) -> Sprint {
    Sprint::from_new("sprint-1".to_string(), new_sprint(start, end))
}

pub(crate) fn open_task(id: &str, points: Option<f64>) -> Task {
    Task {
        id: id.to_string(),
        project_id: Some("project-1".to_string()),
        epic_id: None,
        title: format!("Task {id}"),
        completed: false,
        estimated_time: points,
        completed_at: None,
        start_date: None,
    }
}

pub(crate) fn done_task(id: &str, points: Option<f64>, completed_at: DateTime<Utc>) -> Task {
    Task {
        completed: true,
        completed_at: Some(completed_at),
        ..open_task(id, points)
    }
}

pub(crate) fn epic_task(id: &str, epic_id: &str) -> Task {
    Task {
        epic_id: Some(epic_id.to_string()),
        ..open_task(id, None)
    }
}

pub(crate) fn roadmap_item(id: &str, epic_id: Option<&str>) -> RoadmapItem {
    RoadmapItem {
        id: id.to_string(),
        project_id: "project-1".to_string(),
        title: format!("Item {id}"),
        epic_id: epic_id.map(String::from),
        start_date: None,
        end_date: None,
    }
}

pub(crate) fn depends(id: &str, task_id: &str, depends_on: &str) -> TaskDependency {
    TaskDependency {
        id: id.to_string(),
        task_id: task_id.to_string(),
        depends_on_task_id: depends_on.to_string(),
        dependency_type: Default::default(),
        lag: 0,
        notes: None,
    }
}
