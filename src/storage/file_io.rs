//! JSON file helpers
//!
//! The workspace file is rewritten after every mutation, so writes go to a
//! temp file that is renamed over the target once fully synced.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::MoneeError;

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> MoneeError {
    MoneeError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read JSON from a file, returning `T::default()` if it doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, MoneeError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match read_json_value(path)? {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| storage_err("parse", path, e)),
    }
}

/// Read a file as untyped JSON; `None` if it doesn't exist
pub fn read_json_value<P: AsRef<Path>>(path: P) -> Result<Option<serde_json::Value>, MoneeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path).map_err(|e| storage_err("open", path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_err("parse", path, e))?;

    tracing::debug!(path = %path.display(), "read json");
    Ok(Some(value))
}

/// Write JSON to `path` via a synced temp file and rename
///
/// Either the old contents or the complete new contents are on disk
/// afterwards, never a partial write.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), MoneeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    // same directory so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_err("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_err("serialize", path, e))?;
    writer.flush().map_err(|e| storage_err("flush", &temp_path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_err("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("replace", path, e)
    })?;

    tracing::debug!(path = %path.display(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Totals {
        label: String,
        monthly: f64,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: Totals = read_json(temp_dir.path().join("missing.json")).unwrap();
        assert_eq!(data, Totals::default());
        assert!(read_json_value(temp_dir.path().join("missing.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("totals.json");
        let data = Totals {
            label: "groceries".into(),
            monthly: 433.33,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: Totals = read_json(&path).unwrap();

        assert_eq!(data, loaded);
        assert!(!temp_dir.path().join("nested").join("totals.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Totals, _>(&path).unwrap_err();
        assert!(matches!(err, MoneeError::Storage(_)));
    }
}
