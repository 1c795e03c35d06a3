use cf_appwrite::AppwriteError;
use cf_config::ConfigError;
use cf_provision::ProvisionError;
use cf_service::ServiceError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Appwrite error: {source} {location}")]
    Appwrite {
        source: AppwriteError,
        location: ErrorLocation,
    },

    #[error("Provisioning failed: {source}")]
    Provision {
        #[from]
        source: ProvisionError,
    },

    #[error("{source}")]
    Service {
        #[from]
        source: ServiceError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON output error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AdminError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        AdminError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AppwriteError> for AdminError {
    #[track_caller]
    fn from(source: AppwriteError) -> Self {
        AdminError::Appwrite {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AdminError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        AdminError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
