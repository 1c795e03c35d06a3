use crate::{ConfigError, ConfigErrorResult};

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Variable lookup over the process environment, falling back to values read
/// from a dotenv file. The process environment always wins.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    file_vars: HashMap<String, String>,
}

impl EnvSource {
    /// Read `path` if it exists; a missing file yields an empty source.
    pub fn from_file(path: &Path) -> ConfigErrorResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let iter = dotenvy::from_path_iter(path).map_err(|e| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut file_vars = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::EnvFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            file_vars.insert(key, value);
        }

        Ok(Self { file_vars })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .or_else(|| self.file_vars.get(key).cloned())
    }

    pub fn file_var_count(&self) -> usize {
        self.file_vars.len()
    }

    pub(crate) fn apply_string(&self, key: &str, target: &mut String) {
        if let Some(value) = self.get(key) {
            *target = value;
        }
    }

    pub(crate) fn apply_option_string(&self, key: &str, target: &mut Option<String>) {
        if let Some(value) = self.get(key) {
            *target = (!value.trim().is_empty()).then_some(value);
        }
    }

    pub(crate) fn apply_parse<T: FromStr>(&self, key: &str, target: &mut T) {
        if let Some(parsed) = self.get(key).and_then(|v| v.trim().parse().ok()) {
            *target = parsed;
        }
    }

    pub(crate) fn apply_bool(&self, key: &str, target: &mut bool) {
        if let Some(value) = self.get(key) {
            match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => *target = true,
                "0" | "false" | "no" | "off" => *target = false,
                _ => log::warn!("Ignoring {key}={value}: expected a boolean"),
            }
        }
    }
}
