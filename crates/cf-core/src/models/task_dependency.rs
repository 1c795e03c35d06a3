use crate::DependencyType;

use serde::{Deserialize, Serialize};

/// `task_id` cannot proceed until `depends_on_task_id` does, per `dependency_type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskDependency {
    #[serde(rename = "$id")]
    pub id: String,
    pub task_id: String,
    pub depends_on_task_id: String,
    #[serde(default)]
    pub dependency_type: DependencyType,
    /// Days of slack between the two tasks
    #[serde(default)]
    pub lag: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TaskDependency {
    pub fn is_self_referential(&self) -> bool {
        self.task_id == self.depends_on_task_id
    }
}
