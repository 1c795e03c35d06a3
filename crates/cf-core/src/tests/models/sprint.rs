use crate::tests::{new_sprint, sprint, utc};
use crate::{Sprint, SprintStatus, SprintUpdate};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_new_sprint_when_built_then_planning_with_zero_progress() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 15));

    assert_that!(sprint.status, eq(SprintStatus::Planning));
    assert_that!(sprint.total_points, eq(0.0));
    assert_that!(sprint.completed_points, eq(0.0));
    assert_that!(sprint.velocity, eq(0.0));
    assert_that!(sprint.task_ids, is_empty());
}

#[test]
fn given_blank_name_when_validated_then_name_error() {
    let mut input = new_sprint(utc(2024, 3, 1), utc(2024, 3, 15));
    input.name = "   ".to_string();

    let err = input.validate().unwrap_err();

    assert_that!(err.field(), some(eq("name")));
}

#[test]
fn given_end_before_start_when_validated_then_end_date_error() {
    let input = new_sprint(utc(2024, 3, 15), utc(2024, 3, 1));

    let err = input.validate().unwrap_err();

    assert_that!(err.field(), some(eq("endDate")));
}

#[test]
fn given_same_start_and_end_when_validated_then_ok() {
    let input = new_sprint(utc(2024, 3, 1), utc(2024, 3, 1));

    assert_that!(input.validate(), ok(anything()));
}

#[test]
fn given_update_moving_end_before_start_when_applied_then_sprint_unchanged() {
    let mut sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 15));
    let original = sprint.clone();

    let result = sprint.apply(SprintUpdate {
        name: Some("Renamed".to_string()),
        end_date: Some(utc(2024, 2, 1)),
        ..Default::default()
    });

    assert_that!(result, err(anything()));
    assert_that!(sprint, eq(&original));
}

#[test]
fn given_partial_update_when_applied_then_only_given_fields_change() {
    let mut sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 15));

    sprint
        .apply(SprintUpdate {
            name: Some("  Sprint 2 ".to_string()),
            status: Some(SprintStatus::Active),
            ..Default::default()
        })
        .unwrap();

    assert_that!(sprint.name, eq("Sprint 2"));
    assert_that!(sprint.status, eq(SprintStatus::Active));
    assert_that!(sprint.goals, elements_are![eq("Ship onboarding")]);
    assert_that!(sprint.start_date, eq(utc(2024, 3, 1)));
}

#[test]
fn given_sprint_when_adding_same_task_twice_then_stored_once() {
    let mut sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 15));

    assert!(sprint.add_task("task-1"));
    assert!(!sprint.add_task("task-1"));
    assert!(sprint.add_task("task-2"));

    assert_that!(sprint.task_ids, elements_are![eq("task-1"), eq("task-2")]);
}

#[test]
fn given_sprint_when_removing_unknown_task_then_false() {
    let mut sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 15));
    sprint.add_task("task-1");

    assert!(!sprint.remove_task("task-9"));
    assert!(sprint.remove_task("task-1"));
    assert_that!(sprint.task_ids, is_empty());
}

#[test]
fn given_same_day_sprint_when_total_days_then_one() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 1));

    assert_that!(sprint.total_days(), eq(1));
}

#[test]
fn given_appwrite_document_when_deserialized_then_fields_mapped() {
    let document = json!({
        "$id": "65f0c1",
        "$collectionId": "sprints",
        "$databaseId": "clarityflow",
        "$createdAt": "2024-03-01T09:00:00.000+00:00",
        "$updatedAt": "2024-03-02T09:00:00.000+00:00",
        "$permissions": [],
        "userId": "user-1",
        "projectId": "project-1",
        "name": "Sprint 1",
        "description": null,
        "startDate": "2024-03-01T00:00:00.000+00:00",
        "endDate": "2024-03-15T00:00:00.000+00:00",
        "goals": ["Ship onboarding"],
        "status": "active",
        "velocity": 1.5,
        "completedPoints": 6.0,
        "totalPoints": 20.0,
        "taskIds": ["t1", "t2"]
    });

    let sprint: Sprint = serde_json::from_value(document).unwrap();

    assert_that!(sprint.id, eq("65f0c1"));
    assert_that!(sprint.status, eq(SprintStatus::Active));
    assert_that!(sprint.description, none());
    assert_that!(sprint.task_ids.len(), eq(2));
    assert_that!(sprint.created_at, some(anything()));
}
