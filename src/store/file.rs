use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::PreferenceStore;
use crate::error::StoreError;

/// A store backed by a JSON object file.
///
/// The file is re-read on every `get`, so values changed or removed by
/// another process are observed on the next read. Writes go to a sibling
/// temporary file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read()?;
        let previous = entries.remove(key);
        if previous.is_some() {
            self.write(&entries)?;
        }
        Ok(previous)
    }

    fn read(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let body = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join("prefs.json"))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.set("darkMode", "light").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("light"));
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"sidebar": "open"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set("darkMode", "dark").unwrap();
        assert_eq!(store.get("sidebar").unwrap().as_deref(), Some("open"));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_external_removal_is_observed() {
        let dir = TempDir::new().unwrap();
        let mut ours = store_in(&dir);
        let mut theirs = store_in(&dir);

        ours.set("darkMode", "dark").unwrap();
        assert_eq!(theirs.remove("darkMode").unwrap().as_deref(), Some("dark"));
        assert_eq!(ours.get("darkMode").unwrap(), None);
        assert_eq!(theirs.remove("darkMode").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::new(&path).get("darkMode").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn test_blank_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "\n").unwrap();
        assert_eq!(FileStore::new(&path).get("darkMode").unwrap(), None);
    }
}
