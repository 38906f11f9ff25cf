//! JSON export
//!
//! The export document is a snapshot (entries + targets, flattened to the
//! top level) with the computed summary alongside it, so the same file can
//! be read by other tools and imported back as a scenario.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::engine::{BudgetState, BudgetSummary};
use crate::error::{MoneeError, MoneeResult};
use crate::models::{BudgetSnapshot, DisplayFrequency};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct BudgetExport {
    pub schema_version: u32,
    pub app_version: String,
    pub exported_at: DateTime<Utc>,
    /// Scenario name when exporting a saved scenario
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub snapshot: BudgetSnapshot,
    pub summary: BudgetSummary,
}

impl BudgetExport {
    pub fn new(snapshot: BudgetSnapshot, name: Option<String>, display: DisplayFrequency) -> Self {
        let summary = BudgetState::from(snapshot.clone()).summary(display);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            name,
            snapshot,
            summary,
        }
    }
}

pub fn export_json<W: Write>(export: &BudgetExport, writer: &mut W) -> MoneeResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| MoneeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MoneeError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse_snapshot;
    use crate::models::{BudgetCategory, Entry, Frequency};

    fn sample_snapshot() -> BudgetSnapshot {
        let mut snapshot = BudgetSnapshot::default();
        snapshot.entries.push(
            BudgetCategory::Income,
            Entry::new("Salary", 5000.0, Frequency::Monthly).unwrap(),
        );
        snapshot.entries.push(
            BudgetCategory::Savings,
            Entry::new("ETF", 750.0, Frequency::Monthly).unwrap(),
        );
        snapshot
    }

    #[test]
    fn test_export_contains_summary() {
        let export = BudgetExport::new(sample_snapshot(), None, DisplayFrequency::Monthly);
        let mut buf = Vec::new();
        export_json(&export, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["summary"]["totals"]["income"], 5000.0);
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_export_can_be_reimported() {
        let snapshot = sample_snapshot();
        let export = BudgetExport::new(snapshot.clone(), Some("Plan".into()), DisplayFrequency::Weekly);
        let mut buf = Vec::new();
        export_json(&export, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parse_snapshot(&value).unwrap(), snapshot);
    }
}
