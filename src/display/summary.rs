//! Budget summary display
//!
//! Renders the per-category metrics table: actual share of income against
//! the target, and how far each category is over or under.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use super::format::{
    format_currency, format_percentage, format_signed_currency, format_signed_percentage,
};
use crate::engine::BudgetSummary;
use crate::models::TargetPercentages;

/// Format the full summary: income line, metrics table, unallocated line
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget Summary ({})\n",
        summary.display_frequency
    ));
    output.push_str(&format!(
        "Income: {}\n\n",
        format_currency(summary.totals.income, symbol)
    ));

    let mut builder = Builder::default();
    builder.push_record(vec![
        "Category".to_string(),
        "Total".to_string(),
        "% of Income".to_string(),
        "Target".to_string(),
        "Target Amount".to_string(),
        "Variance".to_string(),
        "Variance %".to_string(),
        "Status".to_string(),
    ]);
    for metrics in &summary.categories {
        builder.push_record(vec![
            metrics.category.to_string(),
            format_currency(metrics.total, symbol),
            format_percentage(metrics.percentage_of_income),
            format_percentage(metrics.target_percentage),
            format_currency(metrics.target_amount, symbol),
            format_signed_currency(metrics.dollar_variance, symbol),
            format_signed_percentage(metrics.percentage_variance),
            metrics.status.label().to_string(),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .modify(Columns::new(1..7), Alignment::right());
    output.push_str(&table.to_string());
    output.push('\n');

    if summary.totals.income == 0.0 {
        output.push_str("\nNo income entered; percentages and variances are shown as 0.\n");
    } else {
        output.push_str(&format!(
            "\nUnallocated: {}\n",
            format_signed_currency(summary.unallocated, symbol)
        ));
    }

    output
}

/// Format the three target percentages
pub fn format_targets(targets: &TargetPercentages) -> String {
    format!(
        "Target percentages:\n  Savings:     {}\n  Fundamental: {}\n  Enjoyment:   {}\n",
        format_percentage(targets.savings),
        format_percentage(targets.fundamental),
        format_percentage(targets.enjoyment),
    )
}
