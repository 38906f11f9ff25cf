//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod entry;
pub mod export;
pub mod scenario;
pub mod summary;
pub mod target;

pub use config::{handle_config_command, ConfigCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use export::{handle_export_command, ExportArgs};
pub use scenario::{handle_scenario_command, ScenarioCommands};
pub use summary::{handle_history_command, handle_summary_command};
pub use target::{handle_target_command, TargetCommands};
