use crate::{ConfigError, ConfigErrorResult, DEFAULT_APPWRITE_ENDPOINT, DEFAULT_DATABASE_ID};

use std::fmt;

use serde::Deserialize;

/// Appwrite resource ids: up to 36 chars of `a-zA-Z0-9._-`, not starting with
/// a special character.
pub const MAX_RESOURCE_ID_LENGTH: usize = 36;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AppwriteConfig {
    /// API root, including the version segment (e.g. `https://cloud.appwrite.io/v1`)
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    /// Server key; only the admin commands need it
    pub api_key: Option<String>,
}

impl Default for AppwriteConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_APPWRITE_ENDPOINT),
            project_id: String::new(),
            database_id: String::from(DEFAULT_DATABASE_ID),
            api_key: None,
        }
    }
}

impl fmt::Debug for AppwriteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppwriteConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("database_id", &self.database_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppwriteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::appwrite(format!(
                "appwrite.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        if self.project_id.trim().is_empty() {
            return Err(ConfigError::appwrite(
                "appwrite.project_id is required (set VITE_APPWRITE_PROJECT_ID)",
            ));
        }

        validate_resource_id("appwrite.database_id", &self.database_id)
    }

    /// Admin operations authenticate with a server key.
    pub fn validate_admin(&self) -> ConfigErrorResult<()> {
        self.validate()?;

        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(ConfigError::appwrite(
                "appwrite.api_key is required for admin commands (set APPWRITE_API_KEY)",
            )),
        }
    }
}

fn validate_resource_id(name: &str, id: &str) -> ConfigErrorResult<()> {
    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    let valid_start = id.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());

    if id.is_empty() || id.len() > MAX_RESOURCE_ID_LENGTH || !valid_chars || !valid_start {
        return Err(ConfigError::appwrite(format!(
            "{} must be 1-{} chars of a-z, A-Z, 0-9, '.', '-', '_' and start with a letter or digit, got '{}'",
            name, MAX_RESOURCE_ID_LENGTH, id
        )));
    }

    Ok(())
}
