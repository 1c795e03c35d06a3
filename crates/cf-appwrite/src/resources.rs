//! Response shapes for the admin resources the provisioner touches.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub document_security: bool,
    #[serde(default)]
    pub attributes: Vec<Value>,
    #[serde(default)]
    pub indexes: Vec<Value>,
}

impl CollectionInfo {
    /// Keys of attributes already present on the collection
    pub fn attribute_keys(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter_map(|a| a.get("key").and_then(Value::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BucketInfo {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    #[serde(default)]
    pub maximum_file_size: u64,
    #[serde(default)]
    pub allowed_file_extensions: Vec<String>,
}

fn enabled_by_default() -> bool {
    true
}
