pub mod custom_field;
pub mod custom_field_type;
pub mod dependency_type;
pub mod roadmap_dependency;
pub mod roadmap_item;
pub mod sprint;
pub mod sprint_status;
pub mod task;
pub mod task_dependency;
