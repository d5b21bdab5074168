//! Tolerant whole-file YAML document I/O.
//!
//! Record, config and ledger files share one discipline: a missing, empty or
//! unparsable file loads as the all-default document (never fatal), and every
//! mutation is a full rewrite of the file. A crash mid-write can therefore
//! leave a truncated document behind, which the next load absorbs as blank.

use std::path::Path;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use kartei_model::ItemRecord;

use crate::error::{Result, StoreError};

/// Loads a YAML document, treating absence and parse failure as default.
pub fn load_document<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| StoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    match serde_yaml::from_str(&text) {
        Ok(value) => Ok(value),
        Err(error) => {
            warn!(path = %path.display(), %error, "unparsable document treated as blank");
            Ok(T::default())
        }
    }
}

/// Rewrites `path` in full with the YAML rendering of `value`.
pub fn save_document<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let text = serde_yaml::to_string(value).map_err(|source| StoreError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| StoreError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// FIFO ordering key for a record: its `touch` field, falling back to the
/// file's modification time.
pub fn touch_key(record: &ItemRecord, path: &Path) -> f64 {
    record.touch.unwrap_or_else(|| file_mtime(path))
}

fn file_mtime(path: &Path) -> f64 {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

/// Current instant as an epoch-seconds touch value.
pub fn now_touch() -> f64 {
    std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kartei_model::QuotaLedger;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let record: ItemRecord = load_document(&dir.path().join("absent.yaml")).unwrap();
        assert_eq!(record, ItemRecord::default());
    }

    #[test]
    fn empty_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.yaml");
        std::fs::write(&path, "").unwrap();
        let record: ItemRecord = load_document(&path).unwrap();
        assert_eq!(record, ItemRecord::default());
    }

    #[test]
    fn unparsable_file_loads_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, ": [не yaml").unwrap();
        let ledger: QuotaLedger = load_document(&path).unwrap();
        assert_eq!(ledger.reviews_today, 0);
        assert_eq!(ledger.new_today, 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.yaml");
        let record = ItemRecord {
            touch: Some(100.5),
            ..ItemRecord::default()
        };
        save_document(&path, &record).unwrap();
        let back: ItemRecord = load_document(&path).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn touch_key_prefers_record_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("card.yaml");
        std::fs::write(&path, "touch: 5\n").unwrap();
        let record = ItemRecord {
            touch: Some(5.0),
            ..ItemRecord::default()
        };
        assert_eq!(touch_key(&record, &path), 5.0);
        // No touch field: falls back to mtime, which is recent.
        assert!(touch_key(&ItemRecord::default(), &path) > 1.0e9);
    }
}
