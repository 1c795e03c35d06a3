use crate::{CoreError, CoreResult, CustomFieldType};

use serde::{Deserialize, Serialize};

pub const MAX_FIELD_NAME_LENGTH: usize = 128;

/// A project-level field definition managed from the settings screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    #[serde(rename = "$id")]
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub field_type: CustomFieldType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomField {
    pub project_id: String,
    pub name: String,
    pub field_type: CustomFieldType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl NewCustomField {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "Field name is required"));
        }
        if name.chars().count() > MAX_FIELD_NAME_LENGTH {
            return Err(CoreError::validation(
                "name",
                format!("Field name exceeds {MAX_FIELD_NAME_LENGTH} characters"),
            ));
        }
        if self.field_type.requires_options()
            && self.options.iter().all(|o| o.trim().is_empty())
        {
            return Err(CoreError::validation(
                "options",
                "Select fields need at least one option",
            ));
        }
        Ok(())
    }
}

impl CustomField {
    pub fn from_new(id: String, position: i64, new: NewCustomField) -> Self {
        // Only select fields keep their options
        let options = if new.field_type.requires_options() {
            new.options
                .into_iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id,
            project_id: new.project_id,
            name: new.name.trim().to_string(),
            field_type: new.field_type,
            options,
            required: new.required,
            position,
        }
    }
}
