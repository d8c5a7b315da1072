//! Error types for the tracker library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::advisor::SchemaViolation;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Site not found for the given ID
    #[error("Site with ID {id} not found")]
    SiteNotFound { id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Login failed or no session is active
    #[error("Authentication failed: {message}")]
    Authentication { message: String },
    /// The signed-in user may not perform the action
    #[error("Permission denied: {action} requires an administrator")]
    PermissionDenied { action: String },
    /// Strategy advisor could not produce an answer
    #[error("Advisor unavailable: {reason}")]
    AdvisorUnavailable { reason: String },
}

/// Coarse classification used by the presentation layer to pick how an
/// error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field is missing or malformed; nothing was written.
    Validation,
    /// The backing store could not be read or written.
    StorageUnavailable,
    /// The advisor failed; never fatal to other operations.
    AdvisorUnavailable,
    /// The addressed record does not exist.
    NotFound,
    /// Credentials or permissions were rejected.
    Authentication,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an advisor error from anything printable.
    pub fn advisor(reason: impl fmt::Display) -> Self {
        Self::AdvisorUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Returns the error's coarse classification.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::InvalidInput { .. } => ErrorKind::Validation,
            TrackerError::SiteNotFound { .. } => ErrorKind::NotFound,
            TrackerError::AdvisorUnavailable { .. } => ErrorKind::AdvisorUnavailable,
            TrackerError::Authentication { .. } | TrackerError::PermissionDenied { .. } => {
                ErrorKind::Authentication
            }
            TrackerError::Database { .. }
            | TrackerError::FileSystem { .. }
            | TrackerError::XdgDirectory(_)
            | TrackerError::Serialization { .. }
            | TrackerError::Configuration { .. } => ErrorKind::StorageUnavailable,
        }
    }
}

impl From<SchemaViolation> for TrackerError {
    fn from(violation: SchemaViolation) -> Self {
        Self::advisor(violation)
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(error: reqwest::Error) -> Self {
        Self::advisor(format!("request failed: {error}"))
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to TrackerError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| TrackerError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
