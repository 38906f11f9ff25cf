//! Budget service
//!
//! Target percentages and the computed budget summary for the workspace.

use crate::audit::EntityType;
use crate::engine::{BudgetState, BudgetSummary};
use crate::error::MoneeResult;
use crate::models::{DisplayFrequency, TargetPercentages};
use crate::storage::Storage;

/// Service for targets and summaries
pub struct BudgetService<'a> {
    storage: &'a Storage,
    default_targets: TargetPercentages,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage, default_targets: TargetPercentages) -> Self {
        Self {
            storage,
            default_targets,
        }
    }

    pub fn state(&self) -> MoneeResult<BudgetState> {
        self.storage.workspace.load(self.default_targets)
    }

    pub fn targets(&self) -> MoneeResult<TargetPercentages> {
        Ok(*self.state()?.targets())
    }

    /// Replace the targets; the three shares must sum to 100
    pub fn set_targets(&self, targets: TargetPercentages) -> MoneeResult<TargetPercentages> {
        let mut state = self.state()?;
        let before = *state.targets();

        state.set_targets(targets)?;
        self.storage.workspace.save(&state)?;

        self.storage
            .log_update(EntityType::Targets, "targets", None, &before, &targets)?;

        tracing::info!(%targets, "updated targets");
        Ok(targets)
    }

    pub fn summary(&self, display: DisplayFrequency) -> MoneeResult<BudgetSummary> {
        Ok(self.state()?.summary(display))
    }
}
