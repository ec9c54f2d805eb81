//! JSON file helpers
//!
//! Writes go to a sibling temp file that is renamed over the target, so a
//! reader sees either the old document or the new one, never half of each.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::BudgieError;

/// Where a loaded value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the file
    File,
    /// No file yet
    Missing,
    /// The file could not be read or parsed; the message says why
    Discarded(String),
}

/// Read JSON from a file; `Ok(None)` if the file does not exist
pub fn read_json<T, P>(path: P) -> Result<Option<T>, BudgieError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| BudgieError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| BudgieError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON, falling back to `fallback()` when the file is absent or bad
///
/// Never fails. A discarded file is logged and left on disk untouched until
/// the next save replaces it.
pub fn read_json_or_else<T, P, F>(path: P, fallback: F) -> (T, LoadSource)
where
    T: DeserializeOwned,
    P: AsRef<Path>,
    F: FnOnce() -> T,
{
    let path = path.as_ref();
    match read_json(path) {
        Ok(Some(value)) => (value, LoadSource::File),
        Ok(None) => (fallback(), LoadSource::Missing),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "discarding unreadable file");
            (fallback(), LoadSource::Discarded(e.to_string()))
        }
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgieError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            BudgieError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = (|| -> Result<(), BudgieError> {
        let file = File::create(&temp_path)
            .map_err(|e| BudgieError::Storage(format!("Failed to create temp file: {}", e)))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| BudgieError::Storage(format!("Failed to serialize data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| BudgieError::Storage(format!("Failed to flush data: {}", e)))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BudgieError::Storage(format!("Failed to sync data: {}", e)))?;
        fs::rename(&temp_path, path)
            .map_err(|e| BudgieError::Storage(format!("Failed to replace {}: {}", path.display(), e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        name: String,
        value: i32,
    }

    fn sample() -> Sample {
        Sample {
            name: "rent".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let loaded: Option<Sample> = read_json(temp_dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.json");

        write_json_atomic(&path, &sample()).unwrap();
        let loaded: Option<Sample> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
        assert!(!temp_dir.path().join("sample.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("sample.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_or_else_sources() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.json");

        let (value, source) = read_json_or_else(&path, sample);
        assert_eq!(value, sample());
        assert_eq!(source, LoadSource::Missing);

        fs::write(&path, "not json at all").unwrap();
        let (value, source): (Sample, _) = read_json_or_else(&path, Sample::default);
        assert_eq!(value, Sample::default());
        assert!(matches!(source, LoadSource::Discarded(_)));

        write_json_atomic(&path, &sample()).unwrap();
        let (value, source): (Sample, _) = read_json_or_else(&path, Sample::default);
        assert_eq!(value, sample());
        assert_eq!(source, LoadSource::File);
    }
}
