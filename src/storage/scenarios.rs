//! Scenario persistence
//!
//! `ScenarioStore` is the port the rest of the crate saves and loads
//! scenarios through. `ScenarioRepository` keeps them in `scenarios.json`;
//! every mutating call is written through to disk immediately.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{MoneeError, MoneeResult};
use crate::models::{validate_scenario_name, BudgetSnapshot, Scenario, ScenarioId, ScenarioRef};

use super::file_io::{read_json, write_json_atomic};

/// Save/load/delete/list of named budget snapshots
pub trait ScenarioStore {
    /// Store `snapshot` under a new, unique (case-insensitive) name
    fn save(&self, name: &str, snapshot: BudgetSnapshot) -> MoneeResult<ScenarioRef>;

    fn load(&self, id: ScenarioId) -> MoneeResult<Scenario>;

    /// Returns whether a scenario was removed
    fn delete(&self, id: ScenarioId) -> MoneeResult<bool>;

    /// Oldest first
    fn list(&self) -> MoneeResult<Vec<ScenarioRef>>;

    /// Resolve a scenario by name (case-insensitive) or by id / id prefix
    ///
    /// An id prefix shared by several scenarios is an error rather than a
    /// guess.
    fn find(&self, query: &str) -> MoneeResult<Option<ScenarioRef>> {
        let scenarios = self.list()?;
        let query = query.trim();

        if let Some(found) = scenarios.iter().find(|s| s.has_name(query)) {
            return Ok(Some(found.clone()));
        }

        let mut matches = scenarios.into_iter().filter(|s| s.id.matches(query));
        let found = matches.next();
        if found.is_some() && matches.next().is_some() {
            return Err(MoneeError::Validation(format!(
                "'{}' matches more than one scenario; use a longer id",
                query
            )));
        }

        Ok(found)
    }
}

/// Shared checks for a new scenario against those already stored
pub(crate) fn check_new_scenario(name: &str, existing: &[Scenario]) -> MoneeResult<()> {
    validate_scenario_name(name).map_err(MoneeError::Validation)?;

    if existing.iter().any(|s| s.has_name(name)) {
        return Err(MoneeError::duplicate_scenario(name.trim()));
    }

    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScenarioData {
    #[serde(default)]
    scenarios: Vec<Scenario>,
}

/// JSON-file backed scenario store
pub struct ScenarioRepository {
    path: PathBuf,
    scenarios: RwLock<Vec<Scenario>>,
}

impl ScenarioRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            scenarios: RwLock::new(Vec::new()),
        }
    }

    pub fn load_from_disk(&self) -> MoneeResult<()> {
        let file_data: ScenarioData = read_json(&self.path)?;

        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *scenarios = file_data.scenarios;
        scenarios.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        tracing::debug!(count = scenarios.len(), "loaded scenarios");
        Ok(())
    }

    fn persist(&self, scenarios: &[Scenario]) -> MoneeResult<()> {
        let file_data = ScenarioData {
            scenarios: scenarios.to_vec(),
        };
        write_json_atomic(&self.path, &file_data)
    }
}

impl ScenarioStore for ScenarioRepository {
    fn save(&self, name: &str, snapshot: BudgetSnapshot) -> MoneeResult<ScenarioRef> {
        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        check_new_scenario(name, &scenarios)?;

        let scenario = Scenario::new(name, snapshot);
        let summary = scenario.summary();
        scenarios.push(scenario);

        if let Err(e) = self.persist(&scenarios) {
            scenarios.pop();
            return Err(e);
        }

        tracing::info!(scenario = %summary.name, id = %summary.id, "saved scenario");
        Ok(summary)
    }

    fn load(&self, id: ScenarioId) -> MoneeResult<Scenario> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        scenarios
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| MoneeError::scenario_not_found(id.to_string()))
    }

    fn delete(&self, id: ScenarioId) -> MoneeResult<bool> {
        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let Some(pos) = scenarios.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        let removed = scenarios.remove(pos);
        if let Err(e) = self.persist(&scenarios) {
            scenarios.insert(pos, removed);
            return Err(e);
        }

        tracing::info!(scenario = %removed.name, id = %id, "deleted scenario");
        Ok(true)
    }

    fn list(&self) -> MoneeResult<Vec<ScenarioRef>> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(scenarios.iter().map(Scenario::summary).collect())
    }
}
