//! YAML export
//!
//! Same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{MoneeError, MoneeResult};
use crate::export::json::BudgetExport;

pub fn export_yaml<W: Write>(export: &BudgetExport, writer: &mut W) -> MoneeResult<()> {
    let header = format!(
        "# monee budget export\n# Generated: {}\n# Totals shown {}\n\n",
        export.exported_at, export.summary.display_frequency
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| MoneeError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| MoneeError::Export(e.to_string()))?;

    Ok(())
}
