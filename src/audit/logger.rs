//! Append-only JSONL audit log

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{MoneeError, MoneeResult};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append `entry` as one line; the file is flushed before returning
    pub fn log(&self, entry: &AuditEntry) -> MoneeResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| MoneeError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_err("open", e))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.io_err("write", e))
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> MoneeResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> MoneeResult<Vec<AuditEntry>> {
        let mut window = VecDeque::with_capacity(count);
        self.for_each_entry(|entry| {
            if count == 0 {
                return;
            }
            if window.len() == count {
                window.pop_front();
            }
            window.push_back(entry);
        })?;
        Ok(window.into())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Damaged lines are skipped with a warning so one bad write does not
    /// hide the rest of the history
    fn for_each_entry(&self, mut f: impl FnMut(AuditEntry)) -> MoneeResult<()> {
        if !self.exists() {
            return Ok(());
        }

        let file = File::open(&self.log_path).map_err(|e| self.io_err("open", e))?;
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_err("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => f(entry),
                Err(e) => tracing::warn!(line = index + 1, error = %e, "skipping audit line"),
            }
        }
        Ok(())
    }

    fn io_err(&self, action: &str, e: std::io::Error) -> MoneeError {
        MoneeError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            e
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn created(id: &str) -> AuditEntry {
        AuditEntry::record(Operation::Create, EntityType::Entry, id, None)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&created("ent-12345678")).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, "ent-12345678");
    }

    #[test]
    fn test_read_recent_keeps_last_entries_in_order() {
        let (logger, _temp) = create_test_logger();
        for i in 0..10 {
            logger.log(&created(&format!("ent-{}", i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["ent-7", "ent-8", "ent-9"]);
        assert!(logger.read_recent(0).unwrap().is_empty());
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_damaged_line_is_skipped() {
        let (logger, temp) = create_test_logger();
        logger.log(&created("ent-1")).unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(temp.path().join("audit.log"))
            .unwrap();
        writeln!(file, "{{not json").unwrap();
        logger.log(&created("ent-2")).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
    }
}
