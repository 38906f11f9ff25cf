//! Audit logging for monee
//!
//! Every change to entries, targets and scenarios is appended to
//! `audit.log` as one JSON object per line, with the entity's state before
//! and after the change where that applies. This is a record of the user's
//! data, separate from the diagnostic `tracing` output.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
