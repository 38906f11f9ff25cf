//! Core data models for monee
//!
//! Entries, the four budget categories, target percentages and saved
//! scenarios, plus the frequency normalization law every amount passes
//! through.

pub mod category;
pub mod dates;
pub mod entries;
pub mod entry;
pub mod frequency;
pub mod ids;
pub mod scenario;
pub mod targets;

pub use category::BudgetCategory;
pub use dates::{iso_week, month_key, week_key};
pub use entries::CategoryEntries;
pub use entry::{Entry, EntryValidationError};
pub use frequency::{
    convert, normalize, normalize_input, parse_amount, DisplayFrequency, Frequency,
    ValueBreakdown, FORTNIGHTS_PER_MONTH, WEEKS_PER_MONTH,
};
pub use ids::{EntryId, ScenarioId};
pub use scenario::{validate_scenario_name, BudgetSnapshot, Scenario, ScenarioRef};
pub use targets::{TargetPercentages, TargetValidationError};
