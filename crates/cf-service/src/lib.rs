//! Services over a [`cf_appwrite::DocumentStore`]: sprint lifecycle and
//! progress, project custom fields, and roadmap dependency inference.

pub mod custom_field_service;
pub mod error;
pub mod loader;
pub mod roadmap_service;
pub mod sprint_service;

pub use custom_field_service::CustomFieldService;
pub use error::{Result as ServiceResult, ServiceError};
pub use roadmap_service::RoadmapService;
pub use sprint_service::SprintService;
