//! Last-reminder persistence.
//!
//! A single-slot durable record: the timestamp of the most recent
//! successfully sent reminder, stored as JSON under the data directory.
//! A missing file reads as the Unix-epoch sentinel so a fresh install
//! behaves as "never reminded".

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::data_dir;
use crate::error::{CoreError, Result};

const STORE_FILE: &str = "last_reminder.json";

/// On-disk shape. Epoch seconds keeps round-trips exact at 1 s
/// resolution regardless of platform clock precision.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    sent_at: i64,
}

/// Single-slot store for the last-reminder timestamp.
pub struct LastReminderStore {
    path: PathBuf,
}

impl LastReminderStore {
    /// Open the store at the default location under the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?.join(STORE_FILE)))
    }

    /// Open the store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored timestamp.
    ///
    /// A missing file is not an error: it yields the epoch sentinel. A
    /// file that exists but cannot be read or parsed is a `StoreIo`.
    pub fn read(&self) -> Result<DateTime<Utc>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(DateTime::UNIX_EPOCH);
            }
            Err(e) => return Err(self.io_error(e.to_string())),
        };

        let record: Record =
            serde_json::from_str(&raw).map_err(|e| self.io_error(e.to_string()))?;
        Utc.timestamp_opt(record.sent_at, 0)
            .single()
            .ok_or_else(|| self.io_error(format!("timestamp out of range: {}", record.sent_at)))
    }

    /// Replace the stored timestamp.
    ///
    /// Writes to a sibling temp file and renames over the record so a
    /// crash mid-write never leaves a torn file behind.
    pub fn write(&self, sent_at: DateTime<Utc>) -> Result<()> {
        let record = Record {
            sent_at: sent_at.timestamp(),
        };
        let json = serde_json::to_string(&record).map_err(|e| self.io_error(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| self.io_error(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e.to_string()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, message: String) -> CoreError {
        CoreError::StoreIo {
            path: self.path.clone(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LastReminderStore {
        LastReminderStore::at(dir.path().join(STORE_FILE))
    }

    #[test]
    fn test_missing_file_reads_epoch_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let ts = store_in(&dir).read().unwrap();
        assert_eq!(ts.timestamp(), 0);
    }

    #[test]
    fn test_round_trip_second_precision() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let sent = Utc.timestamp_opt(1_756_123_456, 0).unwrap();
        store.write(sent).unwrap();
        assert_eq!(store.read().unwrap(), sent);
    }

    #[test]
    fn test_write_truncates_subsecond_precision() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let sent = Utc.timestamp_opt(1_756_123_456, 789_000_000).unwrap();
        store.write(sent).unwrap();
        assert_eq!(store.read().unwrap().timestamp(), 1_756_123_456);
    }

    #[test]
    fn test_overwrite_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.write(Utc.timestamp_opt(100, 0).unwrap()).unwrap();
        store.write(Utc.timestamp_opt(200, 0).unwrap()).unwrap();
        assert_eq!(store.read().unwrap().timestamp(), 200);
    }

    /// A separately opened store on the same path observes the value,
    /// as a separately started process would.
    #[test]
    fn test_reopened_store_sees_written_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        LastReminderStore::at(&path)
            .write(Utc.timestamp_opt(300, 0).unwrap())
            .unwrap();
        let ts = LastReminderStore::at(&path).read().unwrap();
        assert_eq!(ts.timestamp(), 300);
    }

    #[test]
    fn test_corrupt_file_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        std::fs::write(&path, "not json").unwrap();
        let err = LastReminderStore::at(&path).read().unwrap_err();
        assert!(matches!(err, CoreError::StoreIo { .. }));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.write(Utc.timestamp_opt(400, 0).unwrap()).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
