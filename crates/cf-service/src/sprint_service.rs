use crate::loader::{load_all, load_where_in};
use crate::{ServiceError, ServiceResult};

use cf_appwrite::{
    AppwriteResult, DocumentStore, Query, from_document, permission, to_document_data, unique_id,
};
use cf_core::collections::{SPRINTS, TASKS};
use cf_core::{
    BurndownPoint, NewSprint, Sprint, SprintStats, SprintStatus, SprintUpdate, Task,
    calculate_sprint_stats, generate_burndown,
};

use chrono::NaiveDate;
use log::{debug, info};
use serde_json::{Value, json};

/// Sprint lifecycle plus the derived statistics, over any [`DocumentStore`].
pub struct SprintService<S> {
    store: S,
}

impl<S: DocumentStore> SprintService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and store a new sprint. Only the owning user may read or change it.
    pub async fn create_sprint(&self, new: NewSprint) -> ServiceResult<Sprint> {
        new.validate()?;

        let sprint = Sprint::from_new(unique_id(), new);
        let data = to_document_data(&sprint)?;
        let permissions = permission::owner(&sprint.user_id);

        let document = self
            .store
            .create_document(SPRINTS, &sprint.id, data, &permissions)
            .await?;
        let created: Sprint = from_document(document)?;

        info!("Created sprint {} ({}) in project {}", created.id, created.name, created.project_id);
        Ok(created)
    }

    /// `None` when no sprint has this id.
    pub async fn get_sprint(&self, id: &str) -> ServiceResult<Option<Sprint>> {
        match self.store.get_document(SPRINTS, id).await {
            Ok(document) => Ok(Some(from_document(document)?)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Sprints of a project, newest start date first.
    pub async fn list_sprints(&self, project_id: &str) -> ServiceResult<Vec<Sprint>> {
        let queries = [
            Query::equal("projectId", project_id),
            Query::order_desc("startDate"),
        ];
        load_all(&self.store, SPRINTS, &queries).await
    }

    /// The project's active sprint; the latest-starting one if several are active.
    pub async fn get_active_sprint(&self, project_id: &str) -> ServiceResult<Option<Sprint>> {
        let queries = [
            Query::equal("projectId", project_id),
            Query::equal("status", SprintStatus::Active.as_str()),
            Query::order_desc("startDate"),
            Query::limit(1),
        ];
        let page = self.store.list_documents(SPRINTS, &queries).await?;

        match page.documents.into_iter().next() {
            Some(document) => Ok(Some(from_document(document)?)),
            None => Ok(None),
        }
    }

    pub async fn update_sprint(&self, id: &str, update: SprintUpdate) -> ServiceResult<Sprint> {
        let mut sprint = self.require_sprint(id).await?;
        sprint.apply(update)?;

        self.write(id, to_document_data(&sprint)?).await
    }

    pub async fn update_status(&self, id: &str, status: SprintStatus) -> ServiceResult<Sprint> {
        let sprint = self
            .update_sprint(
                id,
                SprintUpdate {
                    status: Some(status),
                    ..SprintUpdate::default()
                },
            )
            .await?;
        info!("Sprint {} is now {}", id, status);
        Ok(sprint)
    }

    pub async fn delete_sprint(&self, id: &str) -> ServiceResult<()> {
        match self.store.delete_document(SPRINTS, id).await {
            Ok(()) => {
                info!("Deleted sprint {}", id);
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(ServiceError::not_found("Sprint", id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Adding a task twice leaves the sprint unchanged.
    pub async fn add_task(&self, id: &str, task_id: &str) -> ServiceResult<Sprint> {
        let mut sprint = self.require_sprint(id).await?;
        if !sprint.add_task(task_id) {
            debug!("Task {} already in sprint {}", task_id, id);
            return Ok(sprint);
        }
        self.write(id, json!({ "taskIds": sprint.task_ids })).await
    }

    pub async fn remove_task(&self, id: &str, task_id: &str) -> ServiceResult<Sprint> {
        let mut sprint = self.require_sprint(id).await?;
        if !sprint.remove_task(task_id) {
            debug!("Task {} not in sprint {}", task_id, id);
            return Ok(sprint);
        }
        self.write(id, json!({ "taskIds": sprint.task_ids })).await
    }

    pub async fn get_sprint_stats(&self, id: &str, today: NaiveDate) -> ServiceResult<SprintStats> {
        let sprint = self.require_sprint(id).await?;
        let tasks = self.sprint_tasks(&sprint).await?;
        Ok(calculate_sprint_stats(&sprint, &tasks, today))
    }

    pub async fn get_burndown(&self, id: &str, today: NaiveDate) -> ServiceResult<Vec<BurndownPoint>> {
        let sprint = self.require_sprint(id).await?;
        let tasks = self.sprint_tasks(&sprint).await?;
        Ok(generate_burndown(&sprint, &tasks, today))
    }

    /// Recompute progress from the sprint's tasks and store it on the sprint.
    pub async fn refresh_progress(&self, id: &str, today: NaiveDate) -> ServiceResult<Sprint> {
        let sprint = self.require_sprint(id).await?;
        let tasks = self.sprint_tasks(&sprint).await?;
        let stats = calculate_sprint_stats(&sprint, &tasks, today);

        debug!(
            "Sprint {} progress: {}/{} points, velocity {:.2}",
            id, stats.completed_points, stats.total_points, stats.velocity
        );

        self.write(
            id,
            json!({
                "totalPoints": stats.total_points,
                "completedPoints": stats.completed_points,
                "velocity": stats.velocity,
            }),
        )
        .await
    }

    /// The sprint's tasks; ids with no task document are skipped.
    pub async fn sprint_tasks(&self, sprint: &Sprint) -> ServiceResult<Vec<Task>> {
        let tasks: Vec<Task> = load_where_in(&self.store, TASKS, "$id", &sprint.task_ids).await?;
        if tasks.len() < sprint.task_ids.len() {
            debug!(
                "Sprint {} references {} missing tasks",
                sprint.id,
                sprint.task_ids.len() - tasks.len()
            );
        }
        Ok(tasks)
    }

    async fn require_sprint(&self, id: &str) -> ServiceResult<Sprint> {
        self.get_sprint(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Sprint", id))
    }

    async fn write(&self, id: &str, data: Value) -> ServiceResult<Sprint> {
        let result: AppwriteResult<Value> = self.store.update_document(SPRINTS, id, data).await;
        match result {
            Ok(document) => Ok(from_document(document)?),
            Err(e) if e.is_not_found() => Err(ServiceError::not_found("Sprint", id)),
            Err(e) => Err(e.into()),
        }
    }
}
