//! Scenario model
//!
//! A scenario is a named, timestamped copy of the whole budget: every entry
//! plus the target percentages. Saved scenarios are never edited in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entries::CategoryEntries;
use super::ids::ScenarioId;
use super::targets::TargetPercentages;

/// Owned copy of the budget state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub entries: CategoryEntries,
    #[serde(alias = "targetPercentages")]
    pub target_percentages: TargetPercentages,
}

/// A saved snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub data: BudgetSnapshot,
}

impl Scenario {
    pub fn new(name: impl Into<String>, data: BudgetSnapshot) -> Self {
        Self {
            id: ScenarioId::new(),
            name: name.into().trim().to_string(),
            created_at: Utc::now(),
            data,
        }
    }

    pub fn summary(&self) -> ScenarioRef {
        ScenarioRef {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Listing summary of a saved scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRef {
    pub id: ScenarioId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl ScenarioRef {
    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Full Unicode case folding, so `Café` and `CAFÉ` are the same name
fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

impl fmt::Display for ScenarioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] created {}",
            self.name,
            self.id,
            self.created_at.format("%Y-%m-%d")
        )
    }
}

/// Scenario names must be non-empty after trimming
pub fn validate_scenario_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter a scenario name".into());
    }
    if name.chars().count() > 100 {
        return Err("Scenario name cannot exceed 100 characters".into());
    }
    Ok(())
}
