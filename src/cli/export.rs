//! Export command
//!
//! Writes the current budget, or a saved scenario, as JSON, YAML or CSV.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::{MoneeError, MoneeResult};
use crate::export::{BudgetExport, ExportFormat};
use crate::models::DisplayFrequency;
use crate::services::{BudgetService, ScenarioService};
use crate::storage::Storage;

/// Arguments for `monee export`
#[derive(Args)]
pub struct ExportArgs {
    /// Export format: json, yaml, or csv
    pub format: ExportFormat,

    /// Output file; "-" for stdout. Defaults to a timestamped file in the
    /// exports directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export a saved scenario instead of the current budget
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Frequency used for the summary in JSON and YAML exports
    #[arg(short, long)]
    pub display: Option<DisplayFrequency>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> MoneeResult<()> {
    let display = args.display.unwrap_or(settings.display_frequency);

    let export = match &args.scenario {
        Some(query) => {
            let scenario =
                ScenarioService::new(storage, settings.default_targets).get(query)?;
            BudgetExport::new(scenario.data, Some(scenario.name), display)
        }
        None => {
            let state = BudgetService::new(storage, settings.default_targets).state()?;
            BudgetExport::new(state.snapshot(), None, display)
        }
    };

    let output = args.output.unwrap_or_else(|| {
        storage.paths().export_dir().join(format!(
            "monee-{}.{}",
            Utc::now().format("%Y%m%d-%H%M%S"),
            args.format.extension()
        ))
    });

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        args.format.write(&export, &mut writer)?;
        writer.flush()?;
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(&output).map_err(|e| {
        MoneeError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    args.format.write(&export, &mut writer)?;
    writer.flush()?;

    tracing::info!(format = %args.format, path = %output.display(), "exported budget");
    println!(
        "Exported {} entries as {} to: {}",
        export.snapshot.entries.len(),
        args.format,
        output.display()
    );

    Ok(())
}
