pub mod collections;
pub mod error;
pub mod models;
pub mod roadmap;
pub mod stats;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::custom_field::{CustomField, NewCustomField};
pub use models::custom_field_type::CustomFieldType;
pub use models::dependency_type::DependencyType;
pub use models::roadmap_dependency::RoadmapDependency;
pub use models::roadmap_item::RoadmapItem;
pub use models::sprint::{NewSprint, Sprint, SprintUpdate};
pub use models::sprint_status::SprintStatus;
pub use models::task::Task;
pub use models::task_dependency::TaskDependency;
pub use roadmap::infer_roadmap_dependencies;
pub use stats::burndown::{BurndownPoint, generate_burndown};
pub use stats::sprint_stats::{SprintStats, calculate_sprint_stats};

pub use error_location::ErrorLocation;
