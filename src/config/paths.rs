//! Path management for monee
//!
//! ## Path Resolution Order
//!
//! 1. `MONEE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `monee` (via `directories`), e.g.
//!    `~/.config/monee` on Linux or `%APPDATA%\monee\config` on Windows

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MoneeError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MONEE_DATA_DIR";

/// Manages all paths used by monee
#[derive(Debug, Clone)]
pub struct MoneePaths {
    base_dir: PathBuf,
}

impl MoneePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoneeError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoneePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding workspace and scenario files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// The live budget, rewritten after every mutation
    pub fn workspace_file(&self) -> PathBuf {
        self.data_dir().join("workspace.json")
    }

    pub fn scenarios_file(&self) -> PathBuf {
        self.data_dir().join("scenarios.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneeError> {
    ProjectDirs::from("", "", "monee")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MoneeError::Config("Could not determine a home directory".into()))
}
