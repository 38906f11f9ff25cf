//! Display formatting for terminal output
//!
//! Turns engine results into text: currency and percentage formatting,
//! entry tables, the budget summary table and scenario listings.

pub mod entry;
pub mod format;
pub mod scenario;
pub mod summary;

pub use entry::{
    format_date_groups, format_entry_added, format_entry_list, format_entry_table,
    format_frequency_summary,
};
pub use format::{format_currency, format_percentage};
pub use scenario::{format_history, format_scenario_list};
pub use summary::{format_budget_summary, format_targets};
