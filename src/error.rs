//! Custom error types for monee
//!
//! One error enum for the whole crate. Engine and model validation failures
//! are mapped into `Validation` or `Restore` at the point they surface.

use thiserror::Error;

/// The main error type for monee operations
#[derive(Error, Debug)]
pub enum MoneeError {
    /// Unreadable settings, unknown `config set` key, no home directory
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input: empty names, non-positive amounts, targets not summing to 100
    #[error("Validation error: {0}")]
    Validation(String),

    /// A scenario snapshot could not be applied to the live budget
    #[error("Restore error: {0}")]
    Restore(String),

    /// No entry or scenario matches the given name or id
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Scenario name already taken (case-insensitive)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    #[error("Export error: {0}")]
    Export(String),

    /// Workspace or scenario file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoneeError {
    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for scenarios
    pub fn scenario_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Scenario",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for scenarios
    pub fn duplicate_scenario(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Scenario",
            identifier: name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a restore error
    pub fn is_restore(&self) -> bool {
        matches!(self, Self::Restore(_))
    }
}

impl From<std::io::Error> for MoneeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoneeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for monee operations
pub type MoneeResult<T> = Result<T, MoneeError>;
