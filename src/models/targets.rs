//! Target allocation model
//!
//! Each non-income category is given a desired share of income, in percent.
//! Defaults follow the common 15/65/20 split.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::BudgetCategory;

const SUM_TOLERANCE: f64 = 1e-9;

/// Desired share of income for each allocated category, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetPercentages {
    pub savings: f64,
    pub fundamental: f64,
    pub enjoyment: f64,
}

impl Default for TargetPercentages {
    fn default() -> Self {
        Self {
            savings: 15.0,
            fundamental: 65.0,
            enjoyment: 20.0,
        }
    }
}

impl TargetPercentages {
    pub fn new(savings: f64, fundamental: f64, enjoyment: f64) -> Self {
        Self {
            savings,
            fundamental,
            enjoyment,
        }
    }

    /// Target for `category`; income has no target and reports 0
    pub fn get(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Income => 0.0,
            BudgetCategory::Savings => self.savings,
            BudgetCategory::Fundamental => self.fundamental,
            BudgetCategory::Enjoyment => self.enjoyment,
        }
    }

    pub fn total(&self) -> f64 {
        self.savings + self.fundamental + self.enjoyment
    }

    /// Edit-time check: each share in 0..=100 and the three summing to 100
    pub fn validate(&self) -> Result<(), TargetValidationError> {
        for category in BudgetCategory::ALLOCATED {
            let pct = self.get(category);
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(TargetValidationError::OutOfRange { category, value: pct });
            }
        }

        let total = self.total();
        if (total - 100.0).abs() > SUM_TOLERANCE {
            return Err(TargetValidationError::SumNot100(total));
        }

        Ok(())
    }
}

impl fmt::Display for TargetPercentages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "savings {}%, fundamental {}%, enjoyment {}%",
            self.savings, self.fundamental, self.enjoyment
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TargetValidationError {
    OutOfRange { category: BudgetCategory, value: f64 },
    SumNot100(f64),
}

impl fmt::Display for TargetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { category, value } => write!(
                f,
                "{} target must be between 0 and 100 (got {})",
                category, value
            ),
            Self::SumNot100(total) => {
                write!(f, "Percentages must add up to 100% (got {}%)", total)
            }
        }
    }
}

impl std::error::Error for TargetValidationError {}
