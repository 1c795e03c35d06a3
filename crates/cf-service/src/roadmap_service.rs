use crate::ServiceResult;
use crate::loader::{load_all, load_where_in};

use cf_appwrite::{DocumentStore, Query};
use cf_core::collections::{ROADMAP_ITEMS, TASK_DEPENDENCIES, TASKS};
use cf_core::{RoadmapDependency, RoadmapItem, Task, TaskDependency, infer_roadmap_dependencies};

use std::collections::HashSet;

use log::debug;

pub struct RoadmapService<S> {
    store: S,
}

impl<S: DocumentStore> RoadmapService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Roadmap edges implied by the dependencies between the project's tasks.
    pub async fn infer_dependencies(&self, project_id: &str) -> ServiceResult<Vec<RoadmapDependency>> {
        let by_project = [Query::equal("projectId", project_id)];

        let items: Vec<RoadmapItem> = load_all(&self.store, ROADMAP_ITEMS, &by_project).await?;
        let tasks = self.project_tasks(&by_project, &items).await?;

        let task_ids: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        let dependencies: Vec<TaskDependency> =
            load_where_in(&self.store, TASK_DEPENDENCIES, "taskId", &task_ids).await?;

        let edges = infer_roadmap_dependencies(&items, &tasks, &dependencies);
        debug!(
            "Project {}: {} items, {} tasks, {} task links -> {} roadmap edges",
            project_id,
            items.len(),
            tasks.len(),
            dependencies.len(),
            edges.len()
        );
        Ok(edges)
    }

    /// Tasks tagged with the project plus tasks reachable only through the
    /// epic of one of its roadmap items, without duplicates.
    async fn project_tasks(&self, by_project: &[Query], items: &[RoadmapItem]) -> ServiceResult<Vec<Task>> {
        let mut tasks: Vec<Task> = load_all(&self.store, TASKS, by_project).await?;

        let mut epic_ids: Vec<String> = items.iter().filter_map(|i| i.epic_id.clone()).collect();
        epic_ids.sort();
        epic_ids.dedup();
        let by_epic: Vec<Task> = load_where_in(&self.store, TASKS, "epicId", &epic_ids).await?;

        let mut seen: HashSet<String> = tasks.iter().map(|t| t.id.clone()).collect();
        tasks.extend(by_epic.into_iter().filter(|t| seen.insert(t.id.clone())));
        Ok(tasks)
    }
}
