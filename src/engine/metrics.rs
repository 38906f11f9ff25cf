//! Budget metrics: share of income, target amounts and variances
//!
//! All figures are unrounded `f64`s. Rounding happens only when a value is
//! rendered; derived figures are computed from the unrounded inputs.

use serde::Serialize;

use super::aggregate::CategoryTotals;
use crate::models::{BudgetCategory, DisplayFrequency, TargetPercentages};

/// Dollar variance below this magnitude counts as on target
const ON_TARGET_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OverBudget,
    OnTarget,
    UnderBudget,
}

impl BudgetStatus {
    fn from_variance(dollar_variance: f64) -> Self {
        if dollar_variance.abs() < ON_TARGET_TOLERANCE {
            Self::OnTarget
        } else if dollar_variance > 0.0 {
            Self::OverBudget
        } else {
            Self::UnderBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OverBudget => "over",
            Self::OnTarget => "on target",
            Self::UnderBudget => "under",
        }
    }
}

/// Metrics for one allocated category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryMetrics {
    pub category: BudgetCategory,
    pub total: f64,
    pub target_percentage: f64,
    pub percentage_of_income: f64,
    pub target_amount: f64,
    /// Positive means over budget
    pub dollar_variance: f64,
    /// Percentage points above (positive) or below the target share
    pub percentage_variance: f64,
    pub status: BudgetStatus,
}

/// `total / income * 100`, or 0 when there is no income
pub fn percentage_of_income(total: f64, income: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    total / income * 100.0
}

pub fn target_amount(income: f64, target_percentage: f64) -> f64 {
    if income == 0.0 {
        return 0.0;
    }
    income * (target_percentage / 100.0)
}

pub fn category_metrics(
    category: BudgetCategory,
    totals: &CategoryTotals,
    targets: &TargetPercentages,
) -> CategoryMetrics {
    let total = totals.get(category);
    let target_percentage = targets.get(category);

    let (percentage_of_income, target_amount, dollar_variance, percentage_variance) =
        if totals.income == 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let pct = percentage_of_income(total, totals.income);
            let target = target_amount(totals.income, target_percentage);
            (pct, target, total - target, pct - target_percentage)
        };

    CategoryMetrics {
        category,
        total,
        target_percentage,
        percentage_of_income,
        target_amount,
        dollar_variance,
        percentage_variance,
        status: BudgetStatus::from_variance(dollar_variance),
    }
}

/// Everything the dashboard shows for one display frequency
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub display_frequency: DisplayFrequency,
    pub totals: CategoryTotals,
    pub categories: Vec<CategoryMetrics>,
    /// Income not yet allocated to any category (negative when overcommitted)
    pub unallocated: f64,
}

impl BudgetSummary {
    pub fn compute(
        totals: CategoryTotals,
        targets: &TargetPercentages,
        display_frequency: DisplayFrequency,
    ) -> Self {
        let categories = BudgetCategory::ALLOCATED
            .iter()
            .map(|c| category_metrics(*c, &totals, targets))
            .collect();

        Self {
            display_frequency,
            totals,
            categories,
            unallocated: totals.income - totals.allocated(),
        }
    }

    pub fn metrics(&self, category: BudgetCategory) -> Option<&CategoryMetrics> {
        self.categories.iter().find(|m| m.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_totals() -> CategoryTotals {
        CategoryTotals {
            income: 5000.0,
            savings: 750.0,
            fundamental: 3000.0,
            enjoyment: 1000.0,
        }
    }

    fn targets() -> TargetPercentages {
        TargetPercentages::new(15.0, 65.0, 20.0)
    }

    #[test]
    fn test_worked_example_savings() {
        let m = category_metrics(BudgetCategory::Savings, &worked_totals(), &targets());
        assert!((m.percentage_of_income - 15.0).abs() < 1e-9);
        assert!((m.target_amount - 750.0).abs() < 1e-9);
        assert!(m.dollar_variance.abs() < 1e-9);
        assert_eq!(m.status, BudgetStatus::OnTarget);
    }

    #[test]
    fn test_worked_example_fundamental() {
        let m = category_metrics(BudgetCategory::Fundamental, &worked_totals(), &targets());
        assert!((m.percentage_of_income - 60.0).abs() < 1e-9);
        assert!((m.target_amount - 3250.0).abs() < 1e-9);
        assert!((m.dollar_variance + 250.0).abs() < 1e-9);
        assert!((m.percentage_variance + 5.0).abs() < 1e-9);
        assert_eq!(m.status, BudgetStatus::UnderBudget);
    }

    #[test]
    fn test_worked_example_enjoyment() {
        let m = category_metrics(BudgetCategory::Enjoyment, &worked_totals(), &targets());
        assert!((m.percentage_of_income - 20.0).abs() < 1e-9);
        assert!((m.target_amount - 1000.0).abs() < 1e-9);
        assert_eq!(m.status, BudgetStatus::OnTarget);
    }

    #[test]
    fn test_zero_income_yields_zeros() {
        let totals = CategoryTotals {
            income: 0.0,
            savings: 200.0,
            fundamental: 1500.0,
            enjoyment: 90.0,
        };
        for category in BudgetCategory::ALLOCATED {
            let m = category_metrics(category, &totals, &targets());
            assert_eq!(m.percentage_of_income, 0.0);
            assert_eq!(m.target_amount, 0.0);
            assert_eq!(m.dollar_variance, 0.0);
            assert_eq!(m.percentage_variance, 0.0);
            assert!(!m.percentage_of_income.is_nan());
        }
    }

    #[test]
    fn test_over_budget() {
        let totals = CategoryTotals {
            income: 4000.0,
            savings: 0.0,
            fundamental: 0.0,
            enjoyment: 1000.0,
        };
        let m = category_metrics(BudgetCategory::Enjoyment, &totals, &targets());
        assert!((m.dollar_variance - 200.0).abs() < 1e-9);
        assert!((m.percentage_variance - 5.0).abs() < 1e-9);
        assert_eq!(m.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn test_unrounded_values_carried_through() {
        // 1/3 of income: 33.333...% must not be truncated before the variance
        let totals = CategoryTotals {
            income: 3000.0,
            savings: 1000.0,
            fundamental: 0.0,
            enjoyment: 0.0,
        };
        let m = category_metrics(BudgetCategory::Savings, &totals, &targets());
        assert!((m.percentage_variance - (100.0 / 3.0 - 15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_summary_unallocated() {
        let summary =
            BudgetSummary::compute(worked_totals(), &targets(), DisplayFrequency::Monthly);
        assert_eq!(summary.categories.len(), 3);
        assert!((summary.unallocated - 250.0).abs() < 1e-9);
        assert!(summary.metrics(BudgetCategory::Income).is_none());
    }
}
