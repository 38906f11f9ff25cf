use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use monee::cli::{
    handle_config_command, handle_entry_command, handle_export_command, handle_history_command,
    handle_scenario_command, handle_summary_command, handle_target_command,
};
use monee::config::{paths::MoneePaths, settings::Settings};
use monee::models::DisplayFrequency;
use monee::storage::Storage;

/// Environment variable holding the tracing filter, e.g. `MONEE_LOG=debug`
const LOG_ENV: &str = "MONEE_LOG";

#[derive(Parser)]
#[command(
    name = "monee",
    version,
    about = "Budget income and expenses against target percentages",
    long_about = "monee records income and expenses at the frequency they occur, \
                  normalizes them to weekly, fortnightly and monthly amounts, and \
                  compares savings, fundamental and enjoyment spending against \
                  target shares of income."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income and expense entries
    #[command(subcommand)]
    Entry(monee::cli::EntryCommands),

    /// Target percentages for savings, fundamental and enjoyment
    #[command(subcommand)]
    Target(monee::cli::TargetCommands),

    /// Show totals, shares of income and variance against targets
    Summary {
        /// Show totals per week, fortnight, or month
        #[arg(short, long)]
        display: Option<DisplayFrequency>,
    },

    /// Saved budget scenarios
    #[command(subcommand)]
    Scenario(monee::cli::ScenarioCommands),

    /// Export the budget as JSON, YAML, or CSV
    Export(monee::cli::ExportArgs),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(monee::cli::ConfigCommands),
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "monee=debug" } else { "monee=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let filter = if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = MoneePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.set_audit_enabled(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Entry(cmd)) => handle_entry_command(&storage, &settings, cmd)?,
        Some(Commands::Target(cmd)) => handle_target_command(&storage, &settings, cmd)?,
        Some(Commands::Summary { display }) => {
            handle_summary_command(&storage, &settings, display)?
        }
        Some(Commands::Scenario(cmd)) => handle_scenario_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Config(cmd)) => handle_config_command(&paths, &mut settings, cmd)?,
        None => {
            println!("monee - budget against target percentages");
            println!();
            println!("Run 'monee --help' for usage information.");
            println!("Run 'monee entry add income Salary 5000 -f monthly' to get started.");
        }
    }

    Ok(())
}
