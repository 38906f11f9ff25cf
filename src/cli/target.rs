//! Target percentage CLI commands
//!
//! Show and replace the savings / fundamental / enjoyment split.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_targets;
use crate::error::MoneeResult;
use crate::models::TargetPercentages;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Target subcommands
#[derive(Subcommand)]
pub enum TargetCommands {
    /// Show the current target percentages
    Show,

    /// Set all three target percentages; they must add up to 100
    Set {
        /// Savings share of income (%)
        savings: f64,
        /// Fundamental share of income (%)
        fundamental: f64,
        /// Enjoyment share of income (%)
        enjoyment: f64,
    },
}

/// Handle a target command
pub fn handle_target_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TargetCommands,
) -> MoneeResult<()> {
    let service = BudgetService::new(storage, settings.default_targets);

    match cmd {
        TargetCommands::Show => {
            print!("{}", format_targets(&service.targets()?));
        }
        TargetCommands::Set {
            savings,
            fundamental,
            enjoyment,
        } => {
            let targets =
                service.set_targets(TargetPercentages::new(savings, fundamental, enjoyment))?;
            println!("Targets updated: {}", targets);
        }
    }

    Ok(())
}
