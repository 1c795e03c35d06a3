use crate::{RoadmapDependency, RoadmapItem, Task, TaskDependency};

use std::collections::HashMap;

/// Lift task-level dependencies to edges between roadmap items.
///
/// A task belongs to the roadmap item that tracks its epic. Each dependency
/// whose two tasks resolve to different items yields an edge from the item of
/// `depends_on_task_id` to the item of `task_id`. Edges are unique per
/// `(from, to)` and keep first-seen order; repeats bump `link_count`.
pub fn infer_roadmap_dependencies(
    items: &[RoadmapItem],
    tasks: &[Task],
    dependencies: &[TaskDependency],
) -> Vec<RoadmapDependency> {
    let item_by_epic: HashMap<&str, &str> = items
        .iter()
        .filter_map(|item| Some((item.epic_id.as_deref()?, item.id.as_str())))
        .collect();

    let item_by_task: HashMap<&str, &str> = tasks
        .iter()
        .filter_map(|task| {
            let item_id = item_by_epic.get(task.epic_id.as_deref()?)?;
            Some((task.id.as_str(), *item_id))
        })
        .collect();

    let mut edges: Vec<RoadmapDependency> = Vec::new();
    let mut edge_index: HashMap<(&str, &str), usize> = HashMap::new();

    for dependency in dependencies {
        let (Some(&from), Some(&to)) = (
            item_by_task.get(dependency.depends_on_task_id.as_str()),
            item_by_task.get(dependency.task_id.as_str()),
        ) else {
            continue;
        };

        if from == to {
            continue;
        }

        match edge_index.get(&(from, to)) {
            Some(&index) => edges[index].link_count += 1,
            None => {
                edge_index.insert((from, to), edges.len());
                edges.push(RoadmapDependency {
                    from: from.to_string(),
                    to: to.to_string(),
                    dependency_type: dependency.dependency_type,
                    link_count: 1,
                });
            }
        }
    }

    edges
}
