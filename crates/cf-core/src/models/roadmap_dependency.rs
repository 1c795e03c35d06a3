use crate::DependencyType;

use serde::{Deserialize, Serialize};

/// Edge between roadmap items: `from` must come before `to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapDependency {
    pub from: String,
    pub to: String,
    pub dependency_type: DependencyType,
    /// Number of task dependencies backing this edge
    pub link_count: u32,
}
