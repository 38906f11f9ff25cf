//! Configuration module for monee
//!
//! - Path resolution (`MONEE_DATA_DIR` or the platform config directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneePaths;
pub use settings::Settings;
