//! The four fixed budget categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A budget partition. Income funds the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Income,
    Savings,
    Fundamental,
    Enjoyment,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Income,
        BudgetCategory::Savings,
        BudgetCategory::Fundamental,
        BudgetCategory::Enjoyment,
    ];

    /// Categories that receive a target share of income
    pub const ALLOCATED: [BudgetCategory; 3] = [
        BudgetCategory::Savings,
        BudgetCategory::Fundamental,
        BudgetCategory::Enjoyment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Savings => "savings",
            Self::Fundamental => "fundamental",
            Self::Enjoyment => "enjoyment",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Income => "Income",
            Self::Savings => "Savings",
            Self::Fundamental => "Fundamental",
            Self::Enjoyment => "Enjoyment",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "savings" => Ok(Self::Savings),
            "fundamental" | "fundamentals" => Ok(Self::Fundamental),
            "enjoyment" => Ok(Self::Enjoyment),
            other => Err(format!(
                "Unknown category '{}'. Valid: income, savings, fundamental, enjoyment",
                other
            )),
        }
    }
}
