//! Export module for monee
//!
//! Writes the workspace or a saved scenario in one of three formats:
//! - CSV: one row per entry (spreadsheet-compatible)
//! - JSON: snapshot plus computed summary, importable as a scenario
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub use self::csv::export_entries_csv;
pub use json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use crate::error::{MoneeError, MoneeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// Write `export` in this format
    pub fn write<W: Write>(&self, export: &BudgetExport, writer: &mut W) -> MoneeResult<()> {
        match self {
            Self::Json => export_json(export, writer),
            Self::Yaml => export_yaml(export, writer),
            Self::Csv => export_entries_csv(&export.snapshot, writer),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = MoneeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(MoneeError::Export(format!(
                "Unknown format: {}. Use: csv, json, or yaml",
                other
            ))),
        }
    }
}
