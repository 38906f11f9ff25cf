//! Storage layer for monee
//!
//! JSON files with atomic writes: the live workspace, the saved scenarios,
//! and the audit log. The engine never calls into this module; services
//! decide when state is persisted.

pub mod file_io;
pub mod memory;
pub mod scenarios;
pub mod workspace;

pub use file_io::{read_json, read_json_value, write_json_atomic};
pub use memory::MemoryScenarioStore;
pub use scenarios::{ScenarioRepository, ScenarioStore};
pub use workspace::WorkspaceRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType, Operation};
use crate::config::paths::MoneePaths;
use crate::error::MoneeError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MoneePaths,
    pub workspace: WorkspaceRepository,
    pub scenarios: ScenarioRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    pub fn new(paths: MoneePaths) -> Result<Self, MoneeError> {
        paths.ensure_directories()?;

        Ok(Self {
            workspace: WorkspaceRepository::new(paths.workspace_file()),
            scenarios: ScenarioRepository::new(paths.scenarios_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    pub fn paths(&self) -> &MoneePaths {
        &self.paths
    }

    /// Load everything that is cached in memory
    pub fn load_all(&mut self) -> Result<(), MoneeError> {
        self.scenarios.load_from_disk()
    }

    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    fn write_audit(&self, entry: AuditEntry) -> Result<(), MoneeError> {
        if self.audit_enabled {
            self.audit.log(&entry)?;
        }
        Ok(())
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MoneeError> {
        self.write_audit(
            AuditEntry::record(Operation::Create, entity_type, entity_id, entity_name)
                .with_after(entity),
        )
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), MoneeError> {
        self.write_audit(
            AuditEntry::record(Operation::Update, entity_type, entity_id, entity_name)
                .with_before(before)
                .with_after(after),
        )
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), MoneeError> {
        self.write_audit(
            AuditEntry::record(Operation::Delete, entity_type, entity_id, entity_name)
                .with_before(entity),
        )
    }

    /// Record the workspace being overwritten from `source_id`
    pub fn log_replace(
        &self,
        source_id: impl Into<String>,
        source_name: Option<String>,
    ) -> Result<(), MoneeError> {
        self.write_audit(AuditEntry::record(
            Operation::Replace,
            EntityType::Workspace,
            source_id,
            source_name,
        ))
    }
}
