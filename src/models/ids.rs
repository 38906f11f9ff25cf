//! Strongly-typed ID wrappers for budget entities
//!
//! Entries and scenarios are both keyed by UUIDs; the newtypes keep the two
//! from being swapped at a call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Whether `query` names this ID, either as a full UUID or as a
            /// (possibly prefixed) leading fragment of at least 4 hex chars
            pub fn matches(&self, query: &str) -> bool {
                let query = query.trim();
                let query = query.strip_prefix($display_prefix).unwrap_or(query);
                if query.len() < 4 {
                    return false;
                }
                self.0.to_string().starts_with(&query.to_ascii_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Short form, e.g. `ent-1a2b3c4d`
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(EntryId, "ent-");
define_id!(ScenarioId, "scn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);
        assert_eq!(&display[4..], &id.as_uuid().to_string()[..8]);

        let scenario = ScenarioId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(scenario.to_string(), "scn-550e8400");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ScenarioId::new();
        let b = ScenarioId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serialization() {
        let id = EntryId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: EntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_from_str_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: EntryId = format!("ent-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_matches_short_form() {
        let id = EntryId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("ent-550e8400"));
        assert!(id.matches("550E"));
        assert!(!id.matches("ent-55"));
        assert!(!id.matches("deadbeef"));
    }
}
