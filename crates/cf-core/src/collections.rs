//! Collection and bucket ids shared by the schema catalog and the services.

pub const SPRINTS: &str = "sprints";
pub const TASKS: &str = "tasks";
pub const TASK_DEPENDENCIES: &str = "task_dependencies";
pub const CUSTOM_FIELDS: &str = "custom_fields";
pub const ROADMAP_ITEMS: &str = "roadmap_items";

pub const TASK_ATTACHMENTS_BUCKET: &str = "task-attachments";
pub const PROJECT_FILES_BUCKET: &str = "project-files";
