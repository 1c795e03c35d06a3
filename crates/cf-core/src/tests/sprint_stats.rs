use crate::calculate_sprint_stats;
use crate::tests::{date, done_task, open_task, sprint, utc};

use googletest::prelude::*;

#[test]
fn given_no_tasks_when_calculated_then_completion_rate_zero() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 11));

    let stats = calculate_sprint_stats(&sprint, &[], date(2024, 3, 5));

    assert_that!(stats.total_tasks, eq(0));
    assert_that!(stats.completion_rate, eq(0.0));
    assert_that!(stats.total_points, eq(0.0));
    assert_that!(stats.velocity, eq(0.0));
}

#[test]
fn given_mixed_tasks_when_calculated_then_rates_and_points_add_up() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 11));
    let tasks = vec![
        done_task("t1", Some(3.0), utc(2024, 3, 2)),
        done_task("t2", Some(5.0), utc(2024, 3, 4)),
        open_task("t3", Some(8.0)),
        open_task("t4", None),
    ];

    let stats = calculate_sprint_stats(&sprint, &tasks, date(2024, 3, 5));

    assert_that!(stats.total_tasks, eq(4));
    assert_that!(stats.completed_tasks, eq(2));
    assert_that!(stats.completion_rate, eq(50.0));
    assert_that!(stats.total_points, eq(17.0));
    assert_that!(stats.completed_points, eq(8.0));
    assert_that!(stats.remaining_points, eq(9.0));
    assert_that!(stats.total_days, eq(10));
    assert_that!(stats.days_elapsed, eq(4));
    assert_that!(stats.days_remaining, eq(6));
    assert_that!(stats.velocity, eq(2.0));
}

#[test]
fn given_today_before_start_when_calculated_then_nothing_elapsed() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 11));
    let tasks = vec![done_task("t1", Some(3.0), utc(2024, 2, 28))];

    let stats = calculate_sprint_stats(&sprint, &tasks, date(2024, 2, 20));

    assert_that!(stats.days_elapsed, eq(0));
    assert_that!(stats.days_remaining, eq(10));
    assert_that!(stats.velocity, eq(0.0));
}

#[test]
fn given_today_after_end_when_calculated_then_elapsed_clamped() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 11));
    let tasks = vec![done_task("t1", Some(20.0), utc(2024, 3, 10))];

    let stats = calculate_sprint_stats(&sprint, &tasks, date(2024, 6, 1));

    assert_that!(stats.days_elapsed, eq(10));
    assert_that!(stats.days_remaining, eq(0));
    assert_that!(stats.velocity, eq(2.0));
}

#[test]
fn given_one_of_three_done_when_calculated_then_rate_is_fraction_times_hundred() {
    let sprint = sprint(utc(2024, 3, 1), utc(2024, 3, 11));
    let tasks = vec![
        done_task("t1", None, utc(2024, 3, 1)),
        open_task("t2", None),
        open_task("t3", None),
    ];

    let stats = calculate_sprint_stats(&sprint, &tasks, date(2024, 3, 2));

    assert_that!(stats.completion_rate, eq(1.0 / 3.0 * 100.0));
}
