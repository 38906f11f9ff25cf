//! monee - income and expense budgeting against target percentages
//!
//! This library provides the core of the monee budgeting tool. Entries are
//! recorded with the frequency they occur at (once, weekly, fortnightly,
//! monthly), normalized to every recurring period, and aggregated per
//! category so spending can be compared with a savings / fundamental /
//! enjoyment split of income. Whole budgets can be saved and restored as
//! named scenarios.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Entries, frequencies, categories, targets and snapshots
//! - `engine`: Aggregation, budget metrics and snapshot restore
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: JSON file storage and the scenario store trait
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: JSON, YAML and CSV export
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust
//! use monee::engine::BudgetState;
//! use monee::models::{BudgetCategory, DisplayFrequency, Frequency};
//!
//! let mut state = BudgetState::new();
//! state.create_entry(BudgetCategory::Income, "Salary", 5000.0, Frequency::Monthly)?;
//! state.create_entry(BudgetCategory::Savings, "ETF", 750.0, Frequency::Monthly)?;
//!
//! let summary = state.summary(DisplayFrequency::Monthly);
//! let savings = summary.metrics(BudgetCategory::Savings).unwrap();
//! assert!((savings.percentage_of_income - 15.0).abs() < 1e-9);
//! # Ok::<(), monee::MoneeError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{MoneeError, MoneeResult};
