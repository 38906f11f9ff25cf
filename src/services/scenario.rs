//! Scenario service
//!
//! Saves the workspace as a named scenario, loads a scenario back over the
//! workspace, and imports snapshot files. The scenario store is injected so
//! the same logic runs against the JSON file store or an in-memory one.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::audit::EntityType;
use crate::engine::{parse_snapshot, BudgetState};
use crate::error::{MoneeError, MoneeResult};
use crate::models::{Scenario, ScenarioRef, TargetPercentages};
use crate::storage::{read_json_value, ScenarioStore, Storage};

pub struct ScenarioService<'a> {
    storage: &'a Storage,
    store: &'a dyn ScenarioStore,
    default_targets: TargetPercentages,
}

impl<'a> ScenarioService<'a> {
    /// Service backed by the storage's own scenario file
    pub fn new(storage: &'a Storage, default_targets: TargetPercentages) -> Self {
        Self::with_store(storage, &storage.scenarios, default_targets)
    }

    pub fn with_store(
        storage: &'a Storage,
        store: &'a dyn ScenarioStore,
        default_targets: TargetPercentages,
    ) -> Self {
        Self {
            storage,
            store,
            default_targets,
        }
    }

    /// Save the current workspace under `name`
    pub fn save(&self, name: &str) -> MoneeResult<ScenarioRef> {
        let state = self.storage.workspace.load(self.default_targets)?;
        let saved = self.store.save(name, state.snapshot())?;

        self.storage.log_create(
            EntityType::Scenario,
            saved.id.to_string(),
            Some(saved.name.clone()),
            &saved,
        )?;

        Ok(saved)
    }

    pub fn list(&self) -> MoneeResult<Vec<ScenarioRef>> {
        self.store.list()
    }

    /// Resolve a scenario by name or id, failing if there is none
    pub fn resolve(&self, query: &str) -> MoneeResult<ScenarioRef> {
        self.store
            .find(query)?
            .ok_or_else(|| MoneeError::scenario_not_found(query))
    }

    pub fn get(&self, query: &str) -> MoneeResult<Scenario> {
        let found = self.resolve(query)?;
        self.store.load(found.id)
    }

    /// Replace the workspace with a saved scenario
    ///
    /// If the scenario does not pass restore validation the workspace file
    /// is left as it was.
    pub fn load(&self, query: &str) -> MoneeResult<Scenario> {
        let scenario = self.get(query)?;

        let mut state = self.storage.workspace.load(self.default_targets)?;
        if let Err(e) = state.restore(scenario.data.clone()) {
            tracing::warn!(scenario = %scenario.name, error = %e, "rejected scenario restore");
            return Err(e);
        }
        self.storage.workspace.save(&state)?;

        self.storage
            .log_replace(scenario.id.to_string(), Some(scenario.name.clone()))?;

        tracing::info!(scenario = %scenario.name, "loaded scenario");
        Ok(scenario)
    }

    pub fn delete(&self, query: &str) -> MoneeResult<ScenarioRef> {
        let found = self.resolve(query)?;
        if !self.store.delete(found.id)? {
            return Err(MoneeError::scenario_not_found(query));
        }

        self.storage.log_delete(
            EntityType::Scenario,
            found.id.to_string(),
            Some(found.name.clone()),
            &found,
        )?;

        Ok(found)
    }

    /// Clear every entry and reset targets to the defaults
    pub fn start_new(&self) -> MoneeResult<BudgetState> {
        let mut state = self.storage.workspace.load(self.default_targets)?;
        state.reset(self.default_targets);
        self.storage.workspace.save(&state)?;

        self.storage.log_replace("new", None)?;
        Ok(state)
    }

    /// Import a snapshot document from disk as a new scenario
    ///
    /// Accepts a saved scenario object (`name` + `data`), a bare snapshot,
    /// or a monee export, in JSON or YAML. `name` overrides any name in the
    /// file.
    pub fn import(&self, path: &Path, name: Option<&str>) -> MoneeResult<ScenarioRef> {
        let document = read_document(path)?;

        let data = document.get("data").unwrap_or(&document);
        let file_name = document.get("name").and_then(Value::as_str);

        let snapshot = parse_snapshot(data)?;
        let name = name.or(file_name).ok_or_else(|| {
            MoneeError::Validation("Please enter a scenario name for the import".into())
        })?;

        let saved = self.store.save(name, snapshot)?;
        self.storage.log_create(
            EntityType::Scenario,
            saved.id.to_string(),
            Some(saved.name.clone()),
            &saved,
        )?;

        tracing::info!(scenario = %saved.name, path = %path.display(), "imported scenario");
        Ok(saved)
    }
}

fn read_document(path: &Path) -> MoneeResult<Value> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );

    if !is_yaml {
        return read_json_value(path)?
            .ok_or_else(|| MoneeError::Storage(format!("File not found: {}", path.display())));
    }

    let file = File::open(path)
        .map_err(|e| MoneeError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    serde_yaml::from_reader(BufReader::new(file))
        .map_err(|e| MoneeError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}
