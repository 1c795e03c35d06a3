use crate::tests::{date, depends, epic_task, open_task, roadmap_item, sprint, utc};
use crate::{Task, generate_burndown, infer_roadmap_dependencies};

use std::collections::HashSet;

use chrono::Days;
use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Roadmap Inference
// =========================================================================

proptest! {
    #[test]
    fn given_random_links_when_inferred_then_no_self_edges_and_unique_pairs(
        task_epics in prop::collection::vec(0usize..4, 1..12),
        links in prop::collection::vec((0usize..12, 0usize..12), 0..40),
    ) {
        let items: Vec<_> = (0..4)
            .map(|i| roadmap_item(&format!("item-{i}"), Some(&format!("epic-{i}"))))
            .collect();
        let tasks: Vec<Task> = task_epics
            .iter()
            .enumerate()
            .map(|(i, epic)| epic_task(&format!("task-{i}"), &format!("epic-{epic}")))
            .collect();
        let deps: Vec<_> = links
            .iter()
            .enumerate()
            .map(|(i, (a, b))| depends(&format!("d{i}"), &format!("task-{a}"), &format!("task-{b}")))
            .collect();

        let edges = infer_roadmap_dependencies(&items, &tasks, &deps);

        let mut seen = HashSet::new();
        for edge in &edges {
            prop_assert_ne!(&edge.from, &edge.to);
            prop_assert!(seen.insert((edge.from.clone(), edge.to.clone())));
        }
        let links_used: u32 = edges.iter().map(|e| e.link_count).sum();
        prop_assert!(links_used as usize <= deps.len());
    }
}

// =========================================================================
// Property-Based Tests - Burn-down
// =========================================================================

proptest! {
    #[test]
    fn given_any_sprint_length_when_generated_then_ideal_is_linear(
        days in 1u64..60,
        estimates in prop::collection::vec(0u32..13, 0..20),
    ) {
        let start = utc(2024, 1, 1);
        let end = start.checked_add_days(Days::new(days)).unwrap();
        let sprint = sprint(start, end);
        let tasks: Vec<Task> = estimates
            .iter()
            .enumerate()
            .map(|(i, p)| open_task(&format!("t{i}"), Some(f64::from(*p))))
            .collect();
        let total: f64 = tasks.iter().map(Task::points).sum();

        let points = generate_burndown(&sprint, &tasks, date(2024, 1, 1));

        prop_assert_eq!(points.len() as u64, days + 1);
        prop_assert_eq!(points[0].ideal, total);
        prop_assert_eq!(points[points.len() - 1].ideal, 0.0);
        let step = total / days as f64;
        for pair in points.windows(2) {
            prop_assert!(pair[1].ideal <= pair[0].ideal);
            prop_assert!(((pair[0].ideal - pair[1].ideal) - step).abs() < 1e-9);
        }
    }
}
