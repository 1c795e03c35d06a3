use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    #[serde(rename = "$id")]
    pub id: String,
    pub project_id: String,
    pub title: String,
    /// Epic whose tasks roll up into this item
    #[serde(default)]
    pub epic_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}
