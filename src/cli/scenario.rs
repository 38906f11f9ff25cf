//! Scenario CLI commands
//!
//! Save the current budget under a name, switch between saved budgets, and
//! import snapshot files.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_scenario_list;
use crate::error::MoneeResult;
use crate::services::ScenarioService;
use crate::storage::Storage;

/// Scenario subcommands
#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// Save the current budget as a named scenario
    Save {
        /// Scenario name (must be unique, case-insensitive)
        name: String,
    },

    /// List saved scenarios
    #[command(alias = "ls")]
    List,

    /// Replace the current budget with a saved scenario
    Load {
        /// Scenario name or ID
        scenario: String,
    },

    /// Delete a saved scenario
    #[command(alias = "rm")]
    Delete {
        /// Scenario name or ID
        scenario: String,
    },

    /// Start a new, empty budget with the default targets
    New,

    /// Import a scenario from a JSON or YAML file
    Import {
        /// File to import (a saved scenario, a snapshot, or a monee export)
        file: PathBuf,
        /// Name for the imported scenario (defaults to the name in the file)
        #[arg(short, long)]
        name: Option<String>,
    },
}

/// Handle a scenario command
pub fn handle_scenario_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ScenarioCommands,
) -> MoneeResult<()> {
    let service = ScenarioService::new(storage, settings.default_targets);

    match cmd {
        ScenarioCommands::Save { name } => {
            let saved = service.save(&name)?;
            println!("Saved scenario '{}' ({})", saved.name, saved.id);
        }

        ScenarioCommands::List => {
            println!("{}", format_scenario_list(&service.list()?));
        }

        ScenarioCommands::Load { scenario } => {
            let loaded = service.load(&scenario)?;
            println!(
                "Loaded scenario '{}' ({} entries)",
                loaded.name,
                loaded.data.entries.len()
            );
        }

        ScenarioCommands::Delete { scenario } => {
            let deleted = service.delete(&scenario)?;
            println!("Deleted scenario '{}'", deleted.name);
        }

        ScenarioCommands::New => {
            let state = service.start_new()?;
            println!("Started a new budget. Targets: {}", state.targets());
        }

        ScenarioCommands::Import { file, name } => {
            let imported = service.import(&file, name.as_deref())?;
            println!(
                "Imported '{}' from {} ({})",
                imported.name,
                file.display(),
                imported.id
            );
        }
    }

    Ok(())
}
