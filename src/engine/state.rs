//! In-memory budget state
//!
//! `BudgetState` holds the live entries and target percentages. It knows
//! nothing about files; callers hand snapshots to a store when they want
//! the state persisted.

use chrono::NaiveDate;
use serde_json::Value;

use super::aggregate::{category_totals, CategoryTotals};
use super::metrics::BudgetSummary;
use super::restore::{normalize_snapshot, parse_snapshot};
use crate::error::{MoneeError, MoneeResult};
use crate::models::{
    BudgetCategory, BudgetSnapshot, CategoryEntries, DisplayFrequency, Entry, EntryId, Frequency,
    TargetPercentages,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetState {
    entries: CategoryEntries,
    targets: TargetPercentages,
}

impl BudgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets(targets: TargetPercentages) -> Self {
        Self {
            entries: CategoryEntries::new(),
            targets,
        }
    }

    pub fn entries(&self) -> &CategoryEntries {
        &self.entries
    }

    pub fn targets(&self) -> &TargetPercentages {
        &self.targets
    }

    /// Validate and append a new entry to `category`
    pub fn create_entry(
        &mut self,
        category: BudgetCategory,
        name: &str,
        amount: f64,
        frequency: Frequency,
    ) -> MoneeResult<Entry> {
        self.create_dated_entry(category, name, amount, frequency, None)
    }

    /// [`create_entry`](Self::create_entry) with the calendar day it applies to
    pub fn create_dated_entry(
        &mut self,
        category: BudgetCategory,
        name: &str,
        amount: f64,
        frequency: Frequency,
        date: Option<NaiveDate>,
    ) -> MoneeResult<Entry> {
        let mut entry = Entry::new(name, amount, frequency)
            .map_err(|e| MoneeError::Validation(e.to_string()))?;
        entry.date = date;
        self.entries.push(category, entry.clone());
        Ok(entry)
    }

    pub fn remove_entry(&mut self, id: EntryId) -> MoneeResult<(BudgetCategory, Entry)> {
        self.entries
            .remove(id)
            .ok_or_else(|| MoneeError::entry_not_found(id.to_string()))
    }

    /// Replace the target percentages; they must sum to 100
    pub fn set_targets(&mut self, targets: TargetPercentages) -> MoneeResult<()> {
        targets
            .validate()
            .map_err(|e| MoneeError::Validation(e.to_string()))?;
        self.targets = targets;
        Ok(())
    }

    /// Drop every entry and reset targets to `targets`
    pub fn reset(&mut self, targets: TargetPercentages) {
        self.entries = CategoryEntries::new();
        self.targets = targets;
    }

    pub fn totals(&self, display: DisplayFrequency) -> CategoryTotals {
        category_totals(&self.entries, display)
    }

    pub fn summary(&self, display: DisplayFrequency) -> BudgetSummary {
        BudgetSummary::compute(self.totals(display), &self.targets, display)
    }

    /// Deep copy of the current state
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            entries: self.entries.clone(),
            target_percentages: self.targets,
        }
    }

    /// Replace the whole state with `snapshot`
    ///
    /// The snapshot is fully validated before anything is replaced; on error
    /// the current state is untouched.
    pub fn restore(&mut self, snapshot: BudgetSnapshot) -> MoneeResult<()> {
        let snapshot = normalize_snapshot(snapshot)?;
        self.entries = snapshot.entries;
        self.targets = snapshot.target_percentages;
        Ok(())
    }

    /// Like [`restore`](Self::restore), from an untyped JSON document
    pub fn restore_json(&mut self, value: &Value) -> MoneeResult<()> {
        let snapshot = parse_snapshot(value)?;
        self.restore(snapshot)
    }
}

impl From<BudgetSnapshot> for BudgetState {
    /// Unvalidated conversion; use [`BudgetState::restore`] for untrusted data
    fn from(snapshot: BudgetSnapshot) -> Self {
        Self {
            entries: snapshot.entries,
            targets: snapshot.target_percentages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn worked_state() -> BudgetState {
        let mut state = BudgetState::new();
        state
            .create_entry(BudgetCategory::Income, "Salary", 5000.0, Frequency::Monthly)
            .unwrap();
        state
            .create_entry(BudgetCategory::Savings, "Index fund", 750.0, Frequency::Monthly)
            .unwrap();
        state
            .create_entry(BudgetCategory::Fundamental, "Living", 3000.0, Frequency::Monthly)
            .unwrap();
        state
            .create_entry(BudgetCategory::Enjoyment, "Fun", 1000.0, Frequency::Monthly)
            .unwrap();
        state
    }

    #[test]
    fn test_create_entry_validation() {
        let mut state = BudgetState::new();
        let err = state
            .create_entry(BudgetCategory::Savings, "", 50.0, Frequency::Monthly)
            .unwrap_err();
        assert!(err.is_validation());

        let err = state
            .create_entry(BudgetCategory::Fundamental, "Rent", -10.0, Frequency::Monthly)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_summary_from_state() {
        let state = worked_state();
        let summary = state.summary(DisplayFrequency::Monthly);
        let fundamental = summary.metrics(BudgetCategory::Fundamental).unwrap();
        assert!((fundamental.percentage_of_income - 60.0).abs() < 1e-9);
        assert!((fundamental.dollar_variance + 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_remove_entry() {
        let mut state = worked_state();
        let id = state.entries().savings[0].id;
        let (category, entry) = state.remove_entry(id).unwrap();
        assert_eq!(category, BudgetCategory::Savings);
        assert_eq!(entry.name, "Index fund");
        assert!(state.remove_entry(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_targets_requires_100() {
        let mut state = BudgetState::new();
        let err = state
            .set_targets(TargetPercentages::new(10.0, 10.0, 10.0))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(*state.targets(), TargetPercentages::default());

        state
            .set_targets(TargetPercentages::new(20.0, 50.0, 30.0))
            .unwrap();
        assert_eq!(state.targets().enjoyment, 30.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = worked_state();
        let mut snapshot = state.snapshot();
        assert_eq!(snapshot, state.snapshot());

        snapshot.entries.income.clear();
        snapshot.target_percentages.savings = 99.0;
        assert_eq!(state.entries().income.len(), 1);
        assert_eq!(state.targets().savings, 15.0);

        let before = state.snapshot();
        state.reset(TargetPercentages::default());
        assert_eq!(before.entries.len(), 4);
    }

    #[test]
    fn test_restore_replaces_everything() {
        let source = worked_state();
        let snapshot = source.snapshot();

        let mut state = BudgetState::new();
        state
            .create_entry(BudgetCategory::Enjoyment, "Old", 5.0, Frequency::Once)
            .unwrap();
        state.restore(snapshot.clone()).unwrap();

        assert_eq!(state.snapshot(), snapshot);
    }

    #[test]
    fn test_restore_json_malformed_leaves_state_untouched() {
        let mut state = worked_state();
        let before = state.clone();

        let doc = json!({
            "entries": {"income": [], "savings": [], "fundamental": [], "enjoyment": []},
            "targetPercentages": {"savings": "oops"}
        });
        let err = state.restore_json(&doc).unwrap_err();

        assert!(err.is_restore());
        assert_eq!(state, before);
    }

    #[test]
    fn test_restore_rejects_invalid_typed_entry() {
        let mut state = worked_state();
        let before = state.clone();

        let mut snapshot = BudgetSnapshot::default();
        let mut bad = Entry::new("Ok", 10.0, Frequency::Monthly).unwrap();
        bad.original_value = -1.0;
        snapshot.entries.push(BudgetCategory::Savings, bad);

        assert!(state.restore(snapshot).unwrap_err().is_restore());
        assert_eq!(state, before);
    }

    #[test]
    fn test_repeated_summaries_are_identical() {
        let state = worked_state();
        let a = state.summary(DisplayFrequency::Weekly);
        let b = state.summary(DisplayFrequency::Weekly);
        assert_eq!(a, b);
    }

    #[test]
    fn test_restore_rejects_shared_entry_id() {
        let mut state = worked_state();
        let before = state.clone();

        let id = "550e8400-e29b-41d4-a716-446655440000";
        let doc = json!({
            "entries": {
                "income": [{"id": id, "name": "Salary", "original_value": 5000, "frequency": "monthly"}],
                "savings": [{"id": id, "name": "ETF", "original_value": 750, "frequency": "monthly"}],
                "fundamental": [], "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let err = state.restore_json(&doc).unwrap_err();
        assert!(err.is_restore());
        assert_eq!(state, before);

        let mut snapshot = before.snapshot();
        let copy = snapshot.entries.income[0].clone();
        snapshot.entries.push(BudgetCategory::Enjoyment, copy);
        assert!(state.restore(snapshot).unwrap_err().is_restore());
        assert_eq!(state, before);
    }

    #[test]
    fn test_create_dated_entry() {
        let mut state = BudgetState::new();
        let day = NaiveDate::from_ymd_opt(2024, 7, 1);
        let entry = state
            .create_dated_entry(BudgetCategory::Income, "Pay", 900.0, Frequency::Weekly, day)
            .unwrap();
        assert_eq!(entry.date, day);
        assert_eq!(state.entries().income[0].date, day);
    }
}
