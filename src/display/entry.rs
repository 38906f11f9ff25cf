//! Entry display formatting
//!
//! Entry tables per category, with amounts shown in the chosen display
//! frequency next to what the user originally typed.

use std::collections::BTreeMap;

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::format::format_currency;
use crate::engine::FrequencySummary;
use crate::models::{BudgetCategory, CategoryEntries, DisplayFrequency, Entry};

/// Table of one category's entries
pub fn format_entry_table(entries: &[Entry], display: DisplayFrequency, symbol: &str) -> String {
    if entries.is_empty() {
        return "  (no entries)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec![
        "ID".to_string(),
        "Description".to_string(),
        "Date".to_string(),
        "Entered".to_string(),
        "Frequency".to_string(),
        format!("Per {}", display.unit()),
    ]);
    for entry in entries {
        builder.push_record(vec![
            entry.id.to_string(),
            entry.name.clone(),
            entry
                .date
                .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string()),
            format_currency(entry.original_value, symbol),
            entry.frequency.label().to_string(),
            format_currency(entry.amount_in(display), symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::single(3), Alignment::right())
        .modify(Columns::single(5), Alignment::right());
    table.to_string()
}

/// Every requested category with its entries and total
pub fn format_entry_list(
    entries: &CategoryEntries,
    categories: &[BudgetCategory],
    display: DisplayFrequency,
    symbol: &str,
) -> String {
    let mut output = String::new();

    for (i, category) in categories.iter().enumerate() {
        let list = entries.get(*category);
        let total = crate::engine::aggregate(list, display);

        output.push_str(&format!(
            "{} ({} {})\n",
            category,
            format_currency(total, symbol),
            display
        ));
        output.push_str(&format_entry_table(list, display, symbol));
        output.push('\n');

        if i < categories.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Count and totals per frequency
pub fn format_frequency_summary(summary: &FrequencySummary, symbol: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(vec![
        "Frequency".to_string(),
        "Entries".to_string(),
        "Entered total".to_string(),
        "Per month".to_string(),
    ]);
    let mut any = false;
    for (frequency, tally) in summary.iter() {
        any = true;
        builder.push_record(vec![
            frequency.label().to_string(),
            tally.count.to_string(),
            format_currency(tally.total, symbol),
            format_currency(tally.monthly, symbol),
        ]);
    }
    if !any {
        return "  (no entries)".to_string();
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Dated entries per month or week, summed as entered
pub fn format_date_groups(groups: &BTreeMap<String, Vec<&Entry>>, symbol: &str) -> String {
    if groups.is_empty() {
        return "  (no dated entries)".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(vec![
        "Period".to_string(),
        "Entries".to_string(),
        "Entered total".to_string(),
    ]);
    for (key, entries) in groups {
        let total: f64 = entries.iter().map(|e| e.original_value).sum();
        builder.push_record(vec![
            key.clone(),
            entries.len().to_string(),
            format_currency(total, symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// One-line confirmation after adding an entry
pub fn format_entry_added(category: BudgetCategory, entry: &Entry, symbol: &str) -> String {
    let mut line = format!(
        "Added {} to {}: {} {}",
        entry.id,
        category,
        entry.name,
        format_currency(entry.original_value, symbol),
    );
    if entry.is_recurring() {
        line.push_str(&format!(
            " {} ({} monthly)",
            entry.frequency,
            format_currency(entry.value, symbol)
        ));
    } else {
        line.push_str(" once");
    }
    line
}
