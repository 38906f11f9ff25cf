//! Audit record structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What happened to the audited entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    /// The whole workspace was replaced (scenario load, new scenario)
    Replace,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Create => "added",
            Self::Update => "changed",
            Self::Delete => "removed",
            Self::Replace => "replaced",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Entry,
    Targets,
    Scenario,
    Workspace,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self {
            Self::Entry => "entry",
            Self::Targets => "targets",
            Self::Scenario => "scenario",
            Self::Workspace => "workspace",
        };
        f.write_str(noun)
    }
}

/// One line of `audit.log`
///
/// `before` holds the entity as it was prior to an update or delete,
/// `after` its new state for a create or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

impl AuditEntry {
    /// Start a record with no entity state attached
    pub fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
        }
    }

    pub fn with_before<T: Serialize>(mut self, state: &T) -> Self {
        self.before = serde_json::to_value(state).ok();
        self
    }

    pub fn with_after<T: Serialize>(mut self, state: &T) -> Self {
        self.after = serde_json::to_value(state).ok();
        self
    }

    /// e.g. `2026-01-31 09:15 removed entry ent-1a2b3c4d "Rent"`
    pub fn format_human_readable(&self) -> String {
        let when = self.timestamp.format("%Y-%m-%d %H:%M");
        match &self.entity_name {
            Some(name) => format!(
                "{} {} {} {} \"{}\"",
                when, self.operation, self.entity_type, self.entity_id, name
            ),
            None => format!(
                "{} {} {} {}",
                when, self.operation, self.entity_type, self.entity_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_carries_new_state() {
        let data = json!({"name": "Rent", "original_value": 2000.0});
        let entry = AuditEntry::record(
            Operation::Create,
            EntityType::Entry,
            "ent-12345678",
            Some("Rent".to_string()),
        )
        .with_after(&data);

        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_update_carries_both_states() {
        let entry = AuditEntry::record(Operation::Update, EntityType::Targets, "targets", None)
            .with_before(&json!({"savings": 15.0}))
            .with_after(&json!({"savings": 20.0}));

        assert_eq!(entry.before.unwrap()["savings"], 15.0);
        assert_eq!(entry.after.unwrap()["savings"], 20.0);
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        let entry = AuditEntry::record(
            Operation::Replace,
            EntityType::Workspace,
            "scn-12345678",
            Some("Baseline".into()),
        );
        let line = serde_json::to_string(&entry).unwrap();

        assert!(line.contains("\"operation\":\"replace\""));
        assert!(line.contains("\"entity_type\":\"workspace\""));
        assert!(!line.contains("before"));
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::record(
            Operation::Delete,
            EntityType::Scenario,
            "scn-12345678",
            Some("Old plan".to_string()),
        );

        assert!(entry
            .format_human_readable()
            .ends_with("removed scenario scn-12345678 \"Old plan\""));
    }
}
