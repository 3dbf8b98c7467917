//! File-backed storage
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go through a sibling
//! temp file plus rename so a partially written file never replaces the
//! previous good value.

use std::fs;
use std::path::PathBuf;

use freta_store::StorageBackend;
use freta_types::{Result, StorageError};

pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Use (and create) `data_dir` as the storage location.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)
            .map_err(|e| StorageError::IoError(format!("{}: {}", data_dir.display(), e)))?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .map_err(|e| StorageError::IoError(format!("{}: {}", path.display(), e)))?;
        Ok(Some(raw))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = self.data_dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value)
            .map_err(|e| StorageError::IoError(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::IoError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_key_is_none() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");
        assert_eq!(storage.read("transport_requests").expect("read"), None);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");

        storage.write("transport_requests", "[]").expect("write");
        assert_eq!(
            storage.read("transport_requests").expect("read").as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("transport_requests.json").exists());
        assert!(!dir.path().join("transport_requests.json.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let dir = tempdir().expect("tempdir");
        let storage = FileStorage::open(dir.path().to_path_buf()).expect("open");

        storage.write("k", "first").expect("write");
        storage.write("k", "second").expect("write");
        assert_eq!(storage.read("k").expect("read").as_deref(), Some("second"));
    }

    #[test]
    fn test_open_creates_nested_dirs() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::open(nested.clone()).expect("open");
        storage.write("k", "v").expect("write");
        assert!(nested.join("k.json").exists());
    }
}
