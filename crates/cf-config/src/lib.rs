mod appwrite_config;
mod config;
mod env_source;
mod error;
mod log_level;
mod logging_config;
mod provisioning_config;

#[cfg(test)]
mod tests;

pub use appwrite_config::AppwriteConfig;
pub use config::Config;
pub use env_source::EnvSource;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provisioning_config::ProvisioningConfig;

pub const CONFIG_DIR_ENV: &str = "CF_CONFIG_DIR";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const ENV_FILENAME: &str = ".env.local";

// Variable names shared with the web client build
pub const ENV_APPWRITE_ENDPOINT: &str = "VITE_APPWRITE_ENDPOINT";
pub const ENV_APPWRITE_PROJECT_ID: &str = "VITE_APPWRITE_PROJECT_ID";
pub const ENV_APPWRITE_DATABASE_ID: &str = "VITE_APPWRITE_DATABASE_ID";
pub const ENV_APPWRITE_API_KEY: &str = "APPWRITE_API_KEY";

const DEFAULT_APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
const DEFAULT_DATABASE_ID: &str = "clarityflow";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";
