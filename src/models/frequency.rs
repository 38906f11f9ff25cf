//! Recurrence frequencies and the normalization law between them
//!
//! Monthly is the pivot unit. Weekly and fortnightly amounts are converted to
//! monthly with the exact ratios 52/12 and 26/12 and back again with their
//! reciprocals, so any two-hop conversion through the pivot returns the
//! starting amount up to floating-point error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weeks in an average month (52 weeks / 12 months)
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Fortnights in an average month (26 fortnights / 12 months)
pub const FORTNIGHTS_PER_MONTH: f64 = 26.0 / 12.0;

/// How often an entry's stated amount recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// A one-time amount; never annualized or rescaled
    #[default]
    Once,
    Weekly,
    Fortnightly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::Once,
        Frequency::Weekly,
        Frequency::Fortnightly,
        Frequency::Monthly,
    ];

    /// The recurring period this frequency denotes, or `None` for `Once`
    pub fn as_recurring(&self) -> Option<DisplayFrequency> {
        match self {
            Self::Once => None,
            Self::Weekly => Some(DisplayFrequency::Weekly),
            Self::Fortnightly => Some(DisplayFrequency::Fortnightly),
            Self::Monthly => Some(DisplayFrequency::Monthly),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Once => "One-time",
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Once => "once",
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "once" | "one-time" | "onetime" => Ok(Self::Once),
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "fortnightly" | "fortnight" | "biweekly" | "bi-weekly" | "f" => Ok(Self::Fortnightly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            other => Err(format!(
                "Unknown frequency '{}'. Valid: once, weekly, fortnightly, monthly",
                other
            )),
        }
    }
}

/// A recurring period in which totals can be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFrequency {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
}

impl DisplayFrequency {
    pub const ALL: [DisplayFrequency; 3] = [
        DisplayFrequency::Weekly,
        DisplayFrequency::Fortnightly,
        DisplayFrequency::Monthly,
    ];

    /// How many of this period fit in one month
    fn per_month(&self) -> f64 {
        match self {
            Self::Weekly => WEEKS_PER_MONTH,
            Self::Fortnightly => FORTNIGHTS_PER_MONTH,
            Self::Monthly => 1.0,
        }
    }

    /// Singular period noun, as in "per week"
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Weekly => "week",
            Self::Fortnightly => "fortnight",
            Self::Monthly => "month",
        }
    }
}

impl fmt::Display for DisplayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Frequency::from(*self))
    }
}

impl From<DisplayFrequency> for Frequency {
    fn from(value: DisplayFrequency) -> Self {
        match value {
            DisplayFrequency::Weekly => Frequency::Weekly,
            DisplayFrequency::Fortnightly => Frequency::Fortnightly,
            DisplayFrequency::Monthly => Frequency::Monthly,
        }
    }
}

impl FromStr for DisplayFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Frequency::from_str(s)?.as_recurring().ok_or_else(|| {
            "Display frequency must be weekly, fortnightly, or monthly".to_string()
        })
    }
}

/// The same amount expressed in each recurring period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueBreakdown {
    pub weekly: f64,
    pub fortnightly: f64,
    pub monthly: f64,
}

impl ValueBreakdown {
    pub const ZERO: ValueBreakdown = ValueBreakdown {
        weekly: 0.0,
        fortnightly: 0.0,
        monthly: 0.0,
    };

    /// A breakdown with the same amount in every period
    pub fn flat(amount: f64) -> Self {
        Self {
            weekly: amount,
            fortnightly: amount,
            monthly: amount,
        }
    }

    pub fn get(&self, period: DisplayFrequency) -> f64 {
        match period {
            DisplayFrequency::Weekly => self.weekly,
            DisplayFrequency::Fortnightly => self.fortnightly,
            DisplayFrequency::Monthly => self.monthly,
        }
    }

    /// Whether every field is within `relative_tolerance` of `other`
    pub fn approx_eq(&self, other: &ValueBreakdown, relative_tolerance: f64) -> bool {
        approx_eq(self.weekly, other.weekly, relative_tolerance)
            && approx_eq(self.fortnightly, other.fortnightly, relative_tolerance)
            && approx_eq(self.monthly, other.monthly, relative_tolerance)
    }
}

/// Convert an amount between two recurring periods through the monthly pivot
pub fn convert(amount: f64, from: DisplayFrequency, to: DisplayFrequency) -> f64 {
    if from == to {
        return amount;
    }
    let monthly = amount * from.per_month();
    monthly / to.per_month()
}

/// Express `amount`, stated at `frequency`, in every recurring period
///
/// Non-finite amounts produce [`ValueBreakdown::ZERO`]. A `Once` amount is
/// copied unconverted into all three fields.
pub fn normalize(amount: f64, frequency: Frequency) -> ValueBreakdown {
    if !amount.is_finite() {
        return ValueBreakdown::ZERO;
    }

    let Some(from) = frequency.as_recurring() else {
        return ValueBreakdown::flat(amount);
    };

    let mut breakdown = ValueBreakdown {
        weekly: convert(amount, from, DisplayFrequency::Weekly),
        fortnightly: convert(amount, from, DisplayFrequency::Fortnightly),
        monthly: convert(amount, from, DisplayFrequency::Monthly),
    };

    // the stated period carries the input exactly
    match from {
        DisplayFrequency::Weekly => breakdown.weekly = amount,
        DisplayFrequency::Fortnightly => breakdown.fortnightly = amount,
        DisplayFrequency::Monthly => breakdown.monthly = amount,
    }

    breakdown
}

/// Normalize free-form user input such as `"1,250.50"` or `"$80"`
///
/// Unparseable input yields a zero breakdown rather than an error.
pub fn normalize_input(input: &str, frequency: Frequency) -> ValueBreakdown {
    match parse_amount(input) {
        Some(amount) => normalize(amount, frequency),
        None => ValueBreakdown::ZERO,
    }
}

/// Parse a user-typed amount, accepting a leading `$` and `,` separators
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$' && !c.is_whitespace())
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn approx_eq(a: f64, b: f64, relative_tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= relative_tolerance * scale
}
