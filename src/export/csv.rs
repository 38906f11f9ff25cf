//! CSV export
//!
//! One row per entry, with every normalized amount so the sheet can be
//! summed in any frequency without re-deriving the conversions.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::{MoneeError, MoneeResult};
use crate::models::{BudgetCategory, BudgetSnapshot, Entry, Frequency};

#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    category: BudgetCategory,
    id: String,
    name: &'a str,
    frequency: Frequency,
    original_value: f64,
    weekly: f64,
    fortnightly: f64,
    monthly: f64,
    date: Option<NaiveDate>,
}

impl<'a> EntryRow<'a> {
    fn new(category: BudgetCategory, entry: &'a Entry) -> Self {
        Self {
            category,
            id: entry.id.as_uuid().to_string(),
            name: &entry.name,
            frequency: entry.frequency,
            original_value: entry.original_value,
            weekly: entry.value_breakdown.weekly,
            fortnightly: entry.value_breakdown.fortnightly,
            monthly: entry.value_breakdown.monthly,
            date: entry.date,
        }
    }
}

/// Write every entry in the snapshot as CSV
pub fn export_entries_csv<W: Write>(snapshot: &BudgetSnapshot, writer: &mut W) -> MoneeResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (category, entry) in snapshot.entries.iter() {
        csv_writer
            .serialize(EntryRow::new(category, entry))
            .map_err(|e| MoneeError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| MoneeError::Export(e.to_string()))?;
    Ok(())
}
