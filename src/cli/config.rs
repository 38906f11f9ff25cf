//! Configuration commands

use clap::Subcommand;

use crate::config::paths::MoneePaths;
use crate::config::settings::Settings;
use crate::error::MoneeResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current settings and file locations
    Show,

    /// Change a setting
    Set {
        /// display_frequency, currency_symbol, audit_enabled, or default_targets
        key: String,
        /// New value (default_targets takes "savings,fundamental,enjoyment")
        value: String,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &MoneePaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> MoneeResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("monee configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Workspace:         {}", paths.workspace_file().display());
            println!("Scenarios:         {}", paths.scenarios_file().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  display_frequency: {}", settings.display_frequency);
            println!("  currency_symbol:   {}", settings.currency_symbol);
            println!("  audit_enabled:     {}", settings.audit_enabled);
            println!(
                "  default_targets:   {}/{}/{}",
                settings.default_targets.savings,
                settings.default_targets.fundamental,
                settings.default_targets.enjoyment
            );
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
