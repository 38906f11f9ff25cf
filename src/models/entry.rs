//! Budget entry model
//!
//! An entry is a single described amount of money moved at a stated
//! frequency, e.g. "Salary, 2,400 fortnightly" or "Car rego, 850 once".
//! The per-period breakdown is computed once at construction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::{normalize, DisplayFrequency, Frequency, ValueBreakdown};
use super::ids::EntryId;

/// A categorized monetary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    /// The amount as entered, in `frequency` units
    #[serde(alias = "originalValue")]
    pub original_value: f64,
    pub frequency: Frequency,
    #[serde(alias = "valueBreakdown")]
    pub value_breakdown: ValueBreakdown,
    /// Monthly-equivalent amount (the original amount for one-time entries)
    pub value: f64,
    pub created_at: DateTime<Utc>,
    /// Calendar day the entry applies to, used for month and week grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Entry {
    /// Build a validated entry with its breakdown computed
    pub fn new(
        name: impl Into<String>,
        original_value: f64,
        frequency: Frequency,
    ) -> Result<Self, EntryValidationError> {
        let name = name.into().trim().to_string();
        validate_fields(&name, original_value)?;

        let value_breakdown = normalize(original_value, frequency);

        Ok(Self {
            id: EntryId::new(),
            name,
            original_value,
            frequency,
            value: value_breakdown.monthly,
            value_breakdown,
            created_at: Utc::now(),
            date: None,
        })
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The amount this entry contributes to a total shown in `period`
    ///
    /// One-time entries are never rescaled.
    pub fn amount_in(&self, period: DisplayFrequency) -> f64 {
        match self.frequency {
            Frequency::Once => self.value,
            _ => self.value_breakdown.get(period),
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.frequency != Frequency::Once
    }

    /// Recompute the breakdown and monthly value from `original_value`
    pub fn renormalize(&mut self) {
        self.value_breakdown = normalize(self.original_value, self.frequency);
        self.value = self.value_breakdown.monthly;
    }

    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_fields(&self.name, self.original_value)
    }
}

fn validate_fields(name: &str, original_value: f64) -> Result<(), EntryValidationError> {
    if name.trim().is_empty() {
        return Err(EntryValidationError::EmptyName);
    }

    if !original_value.is_finite() {
        return Err(EntryValidationError::NotANumber);
    }

    if original_value <= 0.0 {
        return Err(EntryValidationError::NonPositiveAmount(original_value));
    }

    Ok(())
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2} {})",
            self.name, self.original_value, self.frequency
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    EmptyName,
    NotANumber,
    NonPositiveAmount(f64),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Description is required"),
            Self::NotANumber => write!(f, "Please enter a valid amount"),
            Self::NonPositiveAmount(v) => {
                write!(f, "Amount must be greater than zero (got {})", v)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
