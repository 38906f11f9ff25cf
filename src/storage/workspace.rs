//! The live budget on disk
//!
//! `workspace.json` holds the current entries and targets as a snapshot
//! document. Services write it after each successful mutation.

use std::path::PathBuf;

use crate::engine::BudgetState;
use crate::error::MoneeResult;
use crate::models::TargetPercentages;

use super::file_io::{read_json_value, write_json_atomic};

pub struct WorkspaceRepository {
    path: PathBuf,
}

impl WorkspaceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the saved workspace, or an empty budget with `default_targets`
    ///
    /// The file goes through the same validation as a scenario restore, so a
    /// hand-edited or corrupt workspace is rejected with a restore error.
    pub fn load(&self, default_targets: TargetPercentages) -> MoneeResult<BudgetState> {
        let mut state = BudgetState::with_targets(default_targets);

        if let Some(value) = read_json_value(&self.path)? {
            state.restore_json(&value)?;
            tracing::debug!(entries = state.entries().len(), "loaded workspace");
        }

        Ok(state)
    }

    pub fn save(&self, state: &BudgetState) -> MoneeResult<()> {
        write_json_atomic(&self.path, &state.snapshot())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
