//! Category aggregation
//!
//! Totals are recomputed from scratch on every call; there is no caching.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{
    month_key, week_key, BudgetCategory, CategoryEntries, DisplayFrequency, Entry, Frequency,
};

/// Sum a category's entries as shown in `display`
///
/// Recurring entries contribute their breakdown value for `display`;
/// one-time entries always contribute their unscaled value. An empty slice
/// sums to exactly zero.
pub fn aggregate(entries: &[Entry], display: DisplayFrequency) -> f64 {
    entries.iter().map(|e| e.amount_in(display)).sum()
}

/// Totals for all four categories in one display frequency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryTotals {
    pub income: f64,
    pub savings: f64,
    pub fundamental: f64,
    pub enjoyment: f64,
}

impl CategoryTotals {
    pub fn get(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Income => self.income,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Fundamental => self.fundamental,
            BudgetCategory::Enjoyment => self.enjoyment,
        }
    }

    /// Savings + fundamental + enjoyment
    pub fn allocated(&self) -> f64 {
        self.savings + self.fundamental + self.enjoyment
    }
}

pub fn category_totals(entries: &CategoryEntries, display: DisplayFrequency) -> CategoryTotals {
    CategoryTotals {
        income: aggregate(entries.get(BudgetCategory::Income), display),
        savings: aggregate(entries.get(BudgetCategory::Savings), display),
        fundamental: aggregate(entries.get(BudgetCategory::Fundamental), display),
        enjoyment: aggregate(entries.get(BudgetCategory::Enjoyment), display),
    }
}

/// Count and summed amount of the entries sharing one frequency
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FrequencyTally {
    pub count: usize,
    /// Sum of original values, in the frequency's own unit
    pub total: f64,
    /// Sum of monthly-equivalent values
    pub monthly: f64,
}

/// Entries tallied per frequency
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrequencySummary {
    pub once: FrequencyTally,
    pub weekly: FrequencyTally,
    pub fortnightly: FrequencyTally,
    pub monthly: FrequencyTally,
}

impl FrequencySummary {
    pub fn get(&self, frequency: Frequency) -> &FrequencyTally {
        match frequency {
            Frequency::Once => &self.once,
            Frequency::Weekly => &self.weekly,
            Frequency::Fortnightly => &self.fortnightly,
            Frequency::Monthly => &self.monthly,
        }
    }

    fn get_mut(&mut self, frequency: Frequency) -> &mut FrequencyTally {
        match frequency {
            Frequency::Once => &mut self.once,
            Frequency::Weekly => &mut self.weekly,
            Frequency::Fortnightly => &mut self.fortnightly,
            Frequency::Monthly => &mut self.monthly,
        }
    }

    /// Frequencies with at least one entry, in `Frequency::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Frequency, &FrequencyTally)> {
        Frequency::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
            .filter(|(_, tally)| tally.count > 0)
    }
}

pub fn summarize_by_frequency<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
) -> FrequencySummary {
    let mut summary = FrequencySummary::default();
    for entry in entries {
        let tally = summary.get_mut(entry.frequency);
        tally.count += 1;
        tally.total += entry.original_value;
        tally.monthly += entry.value;
    }
    summary
}

/// Dated entries grouped by `YYYY-MM`; undated entries are left out
pub fn group_by_month<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
) -> BTreeMap<String, Vec<&'a Entry>> {
    group_by_date(entries, month_key)
}

/// Dated entries grouped by ISO week (`YYYY-Www`); undated entries are left out
pub fn group_by_week<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
) -> BTreeMap<String, Vec<&'a Entry>> {
    group_by_date(entries, week_key)
}

fn group_by_date<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    key: fn(NaiveDate) -> String,
) -> BTreeMap<String, Vec<&'a Entry>> {
    let mut groups: BTreeMap<String, Vec<&'a Entry>> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = entry.date {
            groups.entry(key(date)).or_default().push(entry);
        }
    }
    groups
}
