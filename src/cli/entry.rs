//! Entry CLI commands
//!
//! Add, list and remove income and expense entries.

use chrono::{Local, NaiveDate};
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::display::{
    format_currency, format_date_groups, format_entry_added, format_entry_list,
    format_frequency_summary,
};
use crate::engine::{group_by_month, group_by_week, summarize_by_frequency};
use crate::error::MoneeResult;
use crate::models::{BudgetCategory, DisplayFrequency, Frequency};
use crate::services::{BudgetService, EntryService};
use crate::storage::Storage;

/// How `entry group` buckets entries
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntryGrouping {
    Frequency,
    Month,
    Week,
}

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add an entry to a category
    Add {
        /// Category: income, savings, fundamental, or enjoyment
        category: BudgetCategory,
        /// Description (e.g., "Salary", "Rent")
        description: String,
        /// Amount as entered (e.g., "1200", "$1,200.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// How often the amount occurs: once, weekly, fortnightly, or monthly
        #[arg(short, long, default_value = "once")]
        frequency: Frequency,
        /// Day the entry applies to, as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List entries, optionally for one category
    #[command(alias = "ls")]
    List {
        /// Category to show
        category: Option<BudgetCategory>,
        /// Show amounts per week, fortnight, or month
        #[arg(short, long)]
        display: Option<DisplayFrequency>,
    },

    /// Count and total entries by frequency, month or ISO week
    Group {
        /// Bucket by frequency, month (YYYY-MM), or ISO week (YYYY-Www)
        #[arg(short, long, value_enum, default_value = "frequency")]
        by: EntryGrouping,
        /// Only entries in this category
        category: Option<BudgetCategory>,
    },

    /// Remove an entry by ID (e.g., "ent-1a2b3c4d")
    #[command(alias = "rm")]
    Remove {
        /// Entry ID or a prefix of at least 4 characters
        id: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> MoneeResult<()> {
    let service = EntryService::new(storage, settings.default_targets);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        EntryCommands::Add {
            category,
            description,
            amount,
            frequency,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let entry = service.add(category, &description, &amount, frequency, Some(date))?;
            println!("{}", format_entry_added(category, &entry, symbol));
        }

        EntryCommands::List { category, display } => {
            let display = display.unwrap_or(settings.display_frequency);
            let state = BudgetService::new(storage, settings.default_targets).state()?;

            let categories: Vec<BudgetCategory> = match category {
                Some(c) => vec![c],
                None => BudgetCategory::ALL.to_vec(),
            };
            print!(
                "{}",
                format_entry_list(state.entries(), &categories, display, symbol)
            );
        }

        EntryCommands::Group { by, category } => {
            let listed = service.list(category)?;
            let entries = listed.iter().map(|(_, e)| e);
            let output = match by {
                EntryGrouping::Frequency => {
                    format_frequency_summary(&summarize_by_frequency(entries), symbol)
                }
                EntryGrouping::Month => format_date_groups(&group_by_month(entries), symbol),
                EntryGrouping::Week => format_date_groups(&group_by_week(entries), symbol),
            };
            println!("{}", output);
        }

        EntryCommands::Remove { id } => {
            let (category, removed) = service.remove(&id)?;
            println!(
                "Removed {} from {}: {} {}",
                removed.id,
                category,
                removed.name,
                format_currency(removed.original_value, symbol)
            );
        }
    }

    Ok(())
}
