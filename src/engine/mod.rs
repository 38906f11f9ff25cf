//! Budget aggregation engine
//!
//! Pure computation over plain data: category totals for a display
//! frequency, share-of-income and variance metrics, and the in-memory budget
//! state with snapshot/restore. Nothing in this module touches the disk.

pub mod aggregate;
pub mod metrics;
pub mod restore;
pub mod state;

pub use aggregate::{
    aggregate, category_totals, group_by_month, group_by_week, summarize_by_frequency,
    CategoryTotals, FrequencySummary, FrequencyTally,
};
pub use metrics::{
    category_metrics, percentage_of_income, target_amount, BudgetStatus, BudgetSummary,
    CategoryMetrics,
};
pub use restore::parse_snapshot;
pub use state::BudgetState;
