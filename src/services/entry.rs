//! Entry service
//!
//! Adds and removes budget entries in the workspace, writing the workspace
//! file and the audit log after each change.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{MoneeError, MoneeResult};
use crate::models::{parse_amount, BudgetCategory, Entry, Frequency, TargetPercentages};
use crate::storage::Storage;

/// Service for entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
    default_targets: TargetPercentages,
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage, default_targets: TargetPercentages) -> Self {
        Self {
            storage,
            default_targets,
        }
    }

    /// Create an entry from form-style input and append it to `category`
    ///
    /// `amount` is user text; a leading `$` and thousands separators are
    /// accepted.
    pub fn add(
        &self,
        category: BudgetCategory,
        name: &str,
        amount: &str,
        frequency: Frequency,
        date: Option<NaiveDate>,
    ) -> MoneeResult<Entry> {
        let value = parse_amount(amount).ok_or_else(|| {
            MoneeError::Validation(format!("Please enter a valid amount (got '{}')", amount))
        })?;

        let mut state = self.storage.workspace.load(self.default_targets)?;
        let entry = state.create_dated_entry(category, name, value, frequency, date)?;
        self.storage.workspace.save(&state)?;

        self.storage.log_create(
            EntityType::Entry,
            entry.id.to_string(),
            Some(entry.name.clone()),
            &entry,
        )?;

        tracing::info!(id = %entry.id, category = category.key(), "added entry");
        Ok(entry)
    }

    /// Find an entry by full id or id prefix (e.g. `ent-1a2b`)
    pub fn find(&self, query: &str) -> MoneeResult<Option<(BudgetCategory, Entry)>> {
        let state = self.storage.workspace.load(self.default_targets)?;
        let mut matches = state.entries().iter().filter(|(_, e)| e.id.matches(query));

        let found = matches.next().map(|(c, e)| (c, e.clone()));
        if found.is_some() && matches.next().is_some() {
            return Err(MoneeError::Validation(format!(
                "'{}' matches more than one entry; use a longer id",
                query
            )));
        }

        Ok(found)
    }

    pub fn remove(&self, query: &str) -> MoneeResult<(BudgetCategory, Entry)> {
        let (_, entry) = self
            .find(query)?
            .ok_or_else(|| MoneeError::entry_not_found(query))?;

        let mut state = self.storage.workspace.load(self.default_targets)?;
        let (category, removed) = state.remove_entry(entry.id)?;
        self.storage.workspace.save(&state)?;

        self.storage.log_delete(
            EntityType::Entry,
            removed.id.to_string(),
            Some(removed.name.clone()),
            &removed,
        )?;

        tracing::info!(id = %removed.id, category = category.key(), "removed entry");
        Ok((category, removed))
    }

    /// Entries in `category`, or all entries when `None`
    pub fn list(&self, category: Option<BudgetCategory>) -> MoneeResult<Vec<(BudgetCategory, Entry)>> {
        let state = self.storage.workspace.load(self.default_targets)?;
        Ok(state
            .entries()
            .iter()
            .filter(|(c, _)| category.map_or(true, |wanted| *c == wanted))
            .map(|(c, e)| (c, e.clone()))
            .collect())
    }
}
