use cf_appwrite::AppwriteError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Appwrite request failed: {source} {location}")]
    Appwrite {
        #[source]
        source: AppwriteError,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    MissingResource {
        message: String,
        location: ErrorLocation,
    },
}

impl ProvisionError {
    #[track_caller]
    pub fn missing<S: Into<String>>(message: S) -> Self {
        ProvisionError::MissingResource {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AppwriteError> for ProvisionError {
    #[track_caller]
    fn from(source: AppwriteError) -> Self {
        ProvisionError::Appwrite {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
