//! Summary and history commands

use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_history};
use crate::error::MoneeResult;
use crate::models::DisplayFrequency;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Print the budget summary table
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    display: Option<DisplayFrequency>,
) -> MoneeResult<()> {
    let display = display.unwrap_or(settings.display_frequency);
    let summary = BudgetService::new(storage, settings.default_targets).summary(display)?;

    print!("{}", format_budget_summary(&summary, &settings.currency_symbol));
    Ok(())
}

/// Print the most recent audit log entries
pub fn handle_history_command(storage: &Storage, count: usize) -> MoneeResult<()> {
    let entries = storage.audit_log().read_recent(count)?;
    println!("{}", format_history(&entries));
    Ok(())
}
