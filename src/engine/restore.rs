//! Strict parsing of scenario snapshots
//!
//! Snapshots arrive as untyped JSON (from the scenario store, an import, or
//! the browser-era `localStorage` format with camelCase keys and numeric
//! ids). Parsing is all-or-nothing: any missing category, non-numeric
//! target, unusable entry or repeated entry id rejects the whole snapshot.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::error::{MoneeError, MoneeResult};
use crate::models::{
    convert, BudgetCategory, BudgetSnapshot, CategoryEntries, DisplayFrequency, Entry, EntryId,
    Frequency, TargetPercentages,
};

/// Parse and validate a snapshot document
pub fn parse_snapshot(value: &Value) -> MoneeResult<BudgetSnapshot> {
    let root = value
        .as_object()
        .ok_or_else(|| restore_err("snapshot must be a JSON object"))?;

    let entries_value = root
        .get("entries")
        .ok_or_else(|| restore_err("missing 'entries'"))?;
    let targets_value = root
        .get("target_percentages")
        .or_else(|| root.get("targetPercentages"))
        .ok_or_else(|| restore_err("missing 'target_percentages'"))?;

    let entries = parse_entries(entries_value)?;
    let target_percentages = parse_targets(targets_value)?;

    Ok(BudgetSnapshot {
        entries,
        target_percentages,
    })
}

/// Validate an already-typed snapshot and bring every entry's breakdown in
/// line with its original value and frequency
pub fn normalize_snapshot(mut snapshot: BudgetSnapshot) -> MoneeResult<BudgetSnapshot> {
    for category in BudgetCategory::ALLOCATED {
        let pct = snapshot.target_percentages.get(category);
        if !pct.is_finite() {
            return Err(restore_err(format!(
                "target for '{}' is not a number",
                category.key()
            )));
        }
    }

    let mut seen = HashSet::new();
    let mut normalized = CategoryEntries::new();
    for category in BudgetCategory::ALL {
        for entry in snapshot.entries.get(category) {
            entry.validate().map_err(|e| {
                restore_err(format!("{} entry '{}': {}", category.key(), entry.name, e))
            })?;
            if !seen.insert(entry.id) {
                return Err(duplicate_id(category, entry.id));
            }
            let mut entry = entry.clone();
            entry.renormalize();
            normalized.push(category, entry);
        }
    }
    snapshot.entries = normalized;

    Ok(snapshot)
}

fn parse_entries(value: &Value) -> MoneeResult<CategoryEntries> {
    let map = value
        .as_object()
        .ok_or_else(|| restore_err("'entries' must be an object keyed by category"))?;

    let mut seen = HashSet::new();
    let mut entries = CategoryEntries::new();
    for category in BudgetCategory::ALL {
        let list = map
            .get(category.key())
            .ok_or_else(|| restore_err(format!("missing category '{}'", category.key())))?
            .as_array()
            .ok_or_else(|| restore_err(format!("category '{}' must be a list", category.key())))?;

        for (index, item) in list.iter().enumerate() {
            let entry = parse_entry(item).map_err(|msg| {
                restore_err(format!("{} entry #{}: {}", category.key(), index + 1, msg))
            })?;
            if !seen.insert(entry.id) {
                return Err(duplicate_id(category, entry.id));
            }
            entries.push(category, entry);
        }
    }

    Ok(entries)
}

fn parse_entry(value: &Value) -> Result<Entry, String> {
    let obj = value.as_object().ok_or("not an object")?;

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .ok_or("missing 'name'")?;

    let frequency = match obj.get("frequency") {
        None | Some(Value::Null) => Frequency::Once,
        Some(Value::String(s)) => s.parse::<Frequency>()?,
        Some(_) => return Err("'frequency' must be a string".into()),
    };

    let original_value = match number_field(obj, &["original_value", "originalValue"])? {
        Some(v) => v,
        // older snapshots only carry the monthly-equivalent value
        None => {
            let monthly = number_field(obj, &["value"])?
                .ok_or("missing 'original_value'")?;
            match frequency.as_recurring() {
                Some(period) => convert(monthly, DisplayFrequency::Monthly, period),
                None => monthly,
            }
        }
    };

    let mut entry = Entry::new(name, original_value, frequency).map_err(|e| e.to_string())?;

    if let Some(id) = obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<EntryId>().ok())
    {
        entry.id = id;
    }

    if let Some(created_at) = obj
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
    {
        entry.created_at = created_at;
    }

    entry.date = match obj.get("date") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(parse_date(s)?),
        Some(_) => return Err("'date' must be a string".into()),
    };

    Ok(entry)
}

/// `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    let day = s.split_once('T').map_or(s, |(day, _)| day);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| format!("'date' must be YYYY-MM-DD, got '{}'", s))
}

fn number_field(obj: &Map<String, Value>, keys: &[&str]) -> Result<Option<f64>, String> {
    for key in keys {
        match obj.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::Number(n)) => {
                return n
                    .as_f64()
                    .map(Some)
                    .ok_or_else(|| format!("'{}' is out of range", key))
            }
            Some(_) => return Err(format!("'{}' must be a number", key)),
        }
    }
    Ok(None)
}

fn parse_targets(value: &Value) -> MoneeResult<TargetPercentages> {
    let obj = value
        .as_object()
        .ok_or_else(|| restore_err("'target_percentages' must be an object"))?;

    let read = |category: BudgetCategory| -> MoneeResult<f64> {
        match obj.get(category.key()) {
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| restore_err(format!("target for '{}' is out of range", category.key()))),
            Some(_) => Err(restore_err(format!(
                "target for '{}' is not a number",
                category.key()
            ))),
            None => Err(restore_err(format!(
                "missing target for '{}'",
                category.key()
            ))),
        }
    };

    Ok(TargetPercentages {
        savings: read(BudgetCategory::Savings)?,
        fundamental: read(BudgetCategory::Fundamental)?,
        enjoyment: read(BudgetCategory::Enjoyment)?,
    })
}

fn duplicate_id(category: BudgetCategory, id: EntryId) -> MoneeError {
    restore_err(format!(
        "duplicate entry id {} in '{}'",
        id.as_uuid(),
        category.key()
    ))
}

fn restore_err(msg: impl Into<String>) -> MoneeError {
    MoneeError::Restore(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_entries() -> Value {
        json!({"income": [], "savings": [], "fundamental": [], "enjoyment": []})
    }

    #[test]
    fn test_parse_browser_format() {
        let doc = json!({
            "entries": {
                "income": [{
                    "id": 1718000000000u64,
                    "name": "Salary",
                    "value": 5196.666,
                    "originalValue": 1200,
                    "frequency": "weekly",
                    "valueBreakdown": {"weekly": 1200, "fortnightly": 2400, "monthly": 5196.666}
                }],
                "savings": [],
                "fundamental": [{"id": 2, "name": "Rent", "value": 2000, "frequency": "monthly"}],
                "enjoyment": []
            },
            "targetPercentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });

        let snapshot = parse_snapshot(&doc).unwrap();
        let salary = &snapshot.entries.income[0];
        assert_eq!(salary.original_value, 1200.0);
        // 4.33 weeks/month in the stored value is replaced by 52/12
        assert!((salary.value - 1200.0 * 52.0 / 12.0).abs() < 1e-9);
        assert_eq!(snapshot.entries.fundamental[0].original_value, 2000.0);
        assert_eq!(snapshot.target_percentages.savings, 15.0);
    }

    #[test]
    fn test_value_only_entry_converts_back_to_stated_frequency() {
        let doc = json!({
            "entries": {
                "income": [{"name": "Pay", "value": 4333.333333333333, "frequency": "weekly"}],
                "savings": [], "fundamental": [], "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let snapshot = parse_snapshot(&doc).unwrap();
        assert!((snapshot.entries.income[0].original_value - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_numeric_target_rejected() {
        let doc = json!({
            "entries": empty_entries(),
            "targetPercentages": {"savings": "oops", "fundamental": 65, "enjoyment": 20}
        });
        let err = parse_snapshot(&doc).unwrap_err();
        assert!(err.is_restore());
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn test_missing_target_rejected() {
        let doc = json!({
            "entries": empty_entries(),
            "target_percentages": {"savings": 15, "fundamental": 85}
        });
        assert!(parse_snapshot(&doc).unwrap_err().is_restore());
    }

    #[test]
    fn test_missing_category_rejected() {
        let doc = json!({
            "entries": {"income": [], "savings": [], "fundamental": []},
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let err = parse_snapshot(&doc).unwrap_err();
        assert!(err.to_string().contains("enjoyment"));
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let doc = json!({
            "entries": {
                "income": [], "savings": [],
                "fundamental": [{"name": "", "original_value": 10, "frequency": "monthly"}],
                "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        assert!(parse_snapshot(&doc).unwrap_err().is_restore());

        let doc = json!({
            "entries": {
                "income": [], "savings": [],
                "fundamental": [{"name": "Rent", "original_value": 10, "frequency": "yearly"}],
                "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        assert!(parse_snapshot(&doc).unwrap_err().is_restore());
    }

    #[test]
    fn test_not_an_object() {
        assert!(parse_snapshot(&json!([1, 2, 3])).unwrap_err().is_restore());
    }

    #[test]
    fn test_normalize_snapshot_rejects_nan_target() {
        let mut snapshot = BudgetSnapshot::default();
        snapshot.target_percentages.enjoyment = f64::NAN;
        assert!(normalize_snapshot(snapshot).unwrap_err().is_restore());
    }

    #[test]
    fn test_duplicate_entry_id_across_categories_rejected() {
        let doc = json!({
            "entries": {
                "income": [{"id": "550e8400-e29b-41d4-a716-446655440000",
                            "name": "Salary", "original_value": 5000, "frequency": "monthly"}],
                "savings": [{"id": "550e8400-e29b-41d4-a716-446655440000",
                             "name": "ETF", "original_value": 750, "frequency": "monthly"}],
                "fundamental": [], "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let err = parse_snapshot(&doc).unwrap_err();
        assert!(err.is_restore());
        assert!(err.to_string().contains("duplicate entry id"));
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn test_numeric_ids_do_not_collide() {
        // browser ids are replaced with fresh ones, so repeats are harmless
        let doc = json!({
            "entries": {
                "income": [{"id": 7, "name": "Pay", "value": 100, "frequency": "monthly"}],
                "savings": [{"id": 7, "name": "ETF", "value": 10, "frequency": "monthly"}],
                "fundamental": [], "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let snapshot = parse_snapshot(&doc).unwrap();
        assert_ne!(snapshot.entries.income[0].id, snapshot.entries.savings[0].id);
    }

    #[test]
    fn test_normalize_snapshot_rejects_repeated_id() {
        let mut snapshot = BudgetSnapshot::default();
        let entry = Entry::new("Rent", 1800.0, Frequency::Monthly).unwrap();
        snapshot.entries.push(BudgetCategory::Fundamental, entry.clone());
        snapshot.entries.push(BudgetCategory::Enjoyment, entry);

        let err = normalize_snapshot(snapshot).unwrap_err();
        assert!(err.is_restore());
        assert!(err.to_string().contains("duplicate entry id"));
    }

    #[test]
    fn test_entry_date_parsed() {
        let doc = json!({
            "entries": {
                "income": [{"name": "Pay", "original_value": 100, "frequency": "weekly",
                            "date": "2024-03-15"}],
                "savings": [{"name": "ETF", "original_value": 10, "frequency": "weekly",
                             "date": "2024-03-16T09:30:00.000Z"}],
                "fundamental": [{"name": "Rent", "original_value": 10, "frequency": "weekly"}],
                "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let snapshot = parse_snapshot(&doc).unwrap();
        assert_eq!(snapshot.entries.income[0].date, NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(snapshot.entries.savings[0].date, NaiveDate::from_ymd_opt(2024, 3, 16));
        assert_eq!(snapshot.entries.fundamental[0].date, None);
    }

    #[test]
    fn test_malformed_entry_date_rejected() {
        let doc = json!({
            "entries": {
                "income": [{"name": "Pay", "original_value": 100, "date": "15/03/2024"}],
                "savings": [], "fundamental": [], "enjoyment": []
            },
            "target_percentages": {"savings": 15, "fundamental": 65, "enjoyment": 20}
        });
        let err = parse_snapshot(&doc).unwrap_err();
        assert!(err.is_restore());
        assert!(err.to_string().contains("date"));
    }
}
