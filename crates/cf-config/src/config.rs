use crate::{
    AppwriteConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    ENV_APPWRITE_API_KEY, ENV_APPWRITE_DATABASE_ID, ENV_APPWRITE_ENDPOINT,
    ENV_APPWRITE_PROJECT_ID, ENV_FILENAME, EnvSource, LoggingConfig, ProvisioningConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub appwrite: AppwriteConfig,
    pub provisioning: ProvisioningConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from; relative paths resolve against it
    #[serde(skip)]
    config_dir: PathBuf,
}

impl Config {
    /// Load config from the config directory.
    ///
    /// Loading order (later wins):
    /// 1. Built-in defaults
    /// 2. `config.toml` if it exists
    /// 3. `.env.local` if it exists
    /// 4. Process environment variables
    ///
    /// Does NOT validate - call validate() or validate_admin() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        let env = EnvSource::from_file(&config_dir.join(ENV_FILENAME))?;
        config.apply_env_overrides(&env);
        config.config_dir = config_dir.to_path_buf();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CF_CONFIG_DIR env var > current working directory
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))
    }

    /// Validate settings every command needs.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.appwrite.validate()?;
        self.provisioning.validate()?;

        let escapes_log_dir = self
            .logging
            .file
            .as_deref()
            .is_some_and(|file| file.contains("..") || Path::new(file).is_absolute());
        if escapes_log_dir {
            return Err(ConfigError::config(
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Validate settings for commands that modify the remote schema.
    pub fn validate_admin(&self) -> ConfigErrorResult<()> {
        self.validate()?;
        self.appwrite.validate_admin()
    }

    /// Path of the log file under the loaded config directory, if file
    /// logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.config_dir.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  appwrite endpoint: {}", self.appwrite.endpoint);
        info!("  appwrite project: {}", self.appwrite.project_id);
        info!("  appwrite database: {}", self.appwrite.database_id);
        info!(
            "  appwrite api key: {}",
            if self.appwrite.api_key.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        info!(
            "  provisioning: schema_delay={}ms, timeout={}s",
            self.provisioning.schema_delay_ms, self.provisioning.request_timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self, env: &EnvSource) {
        // Appwrite
        env.apply_string(ENV_APPWRITE_ENDPOINT, &mut self.appwrite.endpoint);
        env.apply_string(ENV_APPWRITE_PROJECT_ID, &mut self.appwrite.project_id);
        env.apply_string(ENV_APPWRITE_DATABASE_ID, &mut self.appwrite.database_id);
        env.apply_option_string(ENV_APPWRITE_API_KEY, &mut self.appwrite.api_key);

        // Provisioning
        env.apply_parse("CF_SCHEMA_DELAY_MS", &mut self.provisioning.schema_delay_ms);
        env.apply_parse(
            "CF_REQUEST_TIMEOUT_SECS",
            &mut self.provisioning.request_timeout_secs,
        );

        // Logging
        env.apply_parse("CF_LOG_LEVEL", &mut self.logging.level);
        env.apply_bool("CF_LOG_COLORED", &mut self.logging.colored);
        env.apply_option_string("CF_LOG_FILE", &mut self.logging.file);
    }
}
