//! Scenario and history listings

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::audit::AuditEntry;
use crate::models::ScenarioRef;

/// Format saved scenarios, newest first
pub fn format_scenario_list(scenarios: &[ScenarioRef]) -> String {
    if scenarios.is_empty() {
        return "No saved scenarios.\n\nRun 'monee scenario save <name>' to save the current budget."
            .to_string();
    }

    let mut sorted: Vec<&ScenarioRef> = scenarios.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut builder = Builder::default();
    builder.push_record(vec![
        "Name".to_string(),
        "ID".to_string(),
        "Saved".to_string(),
    ]);
    for scenario in sorted {
        builder.push_record(vec![
            scenario.name.clone(),
            scenario.id.to_string(),
            scenario.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Format audit entries one per line
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetSnapshot, Scenario};

    #[test]
    fn test_empty_list_hint() {
        assert!(format_scenario_list(&[]).contains("monee scenario save"));
    }

    #[test]
    fn test_list_newest_first() {
        let older = Scenario::new("Older", BudgetSnapshot::default()).summary();
        let mut newer = Scenario::new("Newer", BudgetSnapshot::default()).summary();
        newer.created_at = older.created_at + chrono::Duration::seconds(60);

        let output = format_scenario_list(&[older, newer]);
        let newer_at = output.find("Newer").unwrap();
        let older_at = output.find("Older").unwrap();
        assert!(newer_at < older_at);
    }
}
