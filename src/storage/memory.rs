//! In-memory scenario store
//!
//! Same rules as the file store without touching disk. Used for throwaway
//! sessions and by tests that exercise services against the store port.

use std::sync::RwLock;

use crate::error::{MoneeError, MoneeResult};
use crate::models::{BudgetSnapshot, Scenario, ScenarioId, ScenarioRef};

use super::scenarios::{check_new_scenario, ScenarioStore};

#[derive(Default)]
pub struct MemoryScenarioStore {
    scenarios: RwLock<Vec<Scenario>>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScenarioStore for MemoryScenarioStore {
    fn save(&self, name: &str, snapshot: BudgetSnapshot) -> MoneeResult<ScenarioRef> {
        let mut scenarios = self
            .scenarios
            .write()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        check_new_scenario(name, &scenarios)?;

        let scenario = Scenario::new(name, snapshot);
        let summary = scenario.summary();
        scenarios.push(scenario);
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

        let before = scenarios.len();
        scenarios.retain(|s| s.id != id);
        Ok(scenarios.len() != before)
    }

    fn list(&self) -> MoneeResult<Vec<ScenarioRef>> {
        let scenarios = self
            .scenarios
            .read()
            .map_err(|e| MoneeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(scenarios.iter().map(Scenario::summary).collect())
    }
}
