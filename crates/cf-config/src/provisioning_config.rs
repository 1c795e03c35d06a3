use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MAX_SCHEMA_DELAY_MS: u64 = 60_000;
pub const DEFAULT_SCHEMA_DELAY_MS: u64 = 2_000;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the admin provisioning run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvisioningConfig {
    /// Pause after creating a collection's attributes, before its indexes.
    /// Appwrite builds attributes asynchronously and rejects indexes on
    /// attributes that are still processing.
    pub schema_delay_ms: u64,
    /// Per-request timeout against the Appwrite API
    pub request_timeout_secs: u64,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            schema_delay_ms: DEFAULT_SCHEMA_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ProvisioningConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.schema_delay_ms > MAX_SCHEMA_DELAY_MS {
            return Err(ConfigError::provisioning(format!(
                "provisioning.schema_delay_ms must be at most {}, got {}",
                MAX_SCHEMA_DELAY_MS, self.schema_delay_ms
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::provisioning(format!(
                "provisioning.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn schema_delay(&self) -> Duration {
        Duration::from_millis(self.schema_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
