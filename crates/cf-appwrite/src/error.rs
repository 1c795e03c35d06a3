use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_CONFLICT: u16 = 409;

/// Errors that can occur during Appwrite API calls
#[derive(Error, Debug)]
pub enum AppwriteError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Appwrite error: {message} (status: {status}, type: {kind}) {location}")]
    Api {
        status: u16,
        kind: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl AppwriteError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AppwriteError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        AppwriteError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api<K: Into<String>, M: Into<String>>(status: u16, kind: K, message: M) -> Self {
        AppwriteError::Api {
            status,
            kind: kind.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            AppwriteError::Api { status, .. } => Some(*status),
            AppwriteError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            AppwriteError::Json { .. } => None,
        }
    }

    /// Appwrite error type, e.g. `collection_already_exists`
    pub fn kind(&self) -> Option<&str> {
        match self {
            AppwriteError::Api { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// 409: the resource already exists
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(STATUS_CONFLICT)
    }

    /// 404: the resource (or its parent) does not exist
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(STATUS_NOT_FOUND)
    }
}

impl From<reqwest::Error> for AppwriteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AppwriteError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for AppwriteError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AppwriteError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, AppwriteError>;
