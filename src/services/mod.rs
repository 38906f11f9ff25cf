//! Service layer for monee
//!
//! Services load the workspace, apply one change through the engine, then
//! persist the result and record it in the audit log.

pub mod budget;
pub mod entry;
pub mod scenario;

pub use budget::BudgetService;
pub use entry::EntryService;
pub use scenario::ScenarioService;
