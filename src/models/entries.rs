//! Entries partitioned by budget category

use serde::{Deserialize, Serialize};

use super::category::BudgetCategory;
use super::entry::Entry;
use super::ids::EntryId;

/// Ordered entry lists, one per category
///
/// Order only matters for display; totals are order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntries {
    pub income: Vec<Entry>,
    pub savings: Vec<Entry>,
    pub fundamental: Vec<Entry>,
    pub enjoyment: Vec<Entry>,
}

impl CategoryEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: BudgetCategory) -> &[Entry] {
        match category {
            BudgetCategory::Income => &self.income,
            BudgetCategory::Savings => &self.savings,
            BudgetCategory::Fundamental => &self.fundamental,
            BudgetCategory::Enjoyment => &self.enjoyment,
        }
    }

    fn get_mut(&mut self, category: BudgetCategory) -> &mut Vec<Entry> {
        match category {
            BudgetCategory::Income => &mut self.income,
            BudgetCategory::Savings => &mut self.savings,
            BudgetCategory::Fundamental => &mut self.fundamental,
            BudgetCategory::Enjoyment => &mut self.enjoyment,
        }
    }

    /// Append an entry to the end of a category's list
    pub fn push(&mut self, category: BudgetCategory, entry: Entry) {
        self.get_mut(category).push(entry);
    }

    /// Remove an entry by id from whichever category holds it
    pub fn remove(&mut self, id: EntryId) -> Option<(BudgetCategory, Entry)> {
        for category in BudgetCategory::ALL {
            let list = self.get_mut(category);
            if let Some(pos) = list.iter().position(|e| e.id == id) {
                return Some((category, list.remove(pos)));
            }
        }
        None
    }

    pub fn find(&self, id: EntryId) -> Option<(BudgetCategory, &Entry)> {
        self.iter().find(|(_, e)| e.id == id)
    }

    /// All entries with their category, in category then insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, &Entry)> {
        BudgetCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |e| (c, e)))
    }

    pub fn len(&self) -> usize {
        BudgetCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
