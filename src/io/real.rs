//! Store implementations: in-memory and one-file-per-key on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::core::{Error, Result};
use crate::io::traits::KeyValueStore;

/// In-memory store using a thread-safe HashMap.
///
/// Suitable for tests and for one-shot commands that do not persist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let data = self
            .data
            .read()
            .map_err(|e| Error::Storage(format!("Store read lock failed: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .write()
            .map_err(|e| Error::Storage(format!("Store write lock failed: {}", e)))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.data
            .write()
            .map_err(|e| Error::Storage(format!("Store write lock failed: {}", e)))?
            .remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.data
            .write()
            .map_err(|e| Error::Storage(format!("Store write lock failed: {}", e)))?
            .clear();
        Ok(())
    }
}

/// Directory-backed store: each key is a `<key>.json` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store under the platform data directory, e.g. `~/.local/share/tbap`
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("tbap")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::Storage(format!("Invalid store key '{}'", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::file_system_io("Failed to read stored value", path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .map_err(|e| Error::file_system_io("Failed to create store directory", &self.root, e))?;
        fs::write(&path, value)
            .map_err(|e| Error::file_system_io("Failed to write stored value", path, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::file_system_io("Failed to remove stored value", path, e)),
        }
    }

    fn clear(&self) -> Result<()> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(Error::file_system_io(
                    "Failed to list store directory",
                    &self.root,
                    e,
                ))
            }
        };

        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)
                    .map_err(|e| Error::file_system_io("Failed to remove stored value", &path, e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_operations() {
        let store = MemoryStore::new();

        assert!(store.get("key1").unwrap().is_none());

        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").unwrap().as_deref(), Some("value1"));

        store.remove("key1").unwrap();
        assert!(store.get("key1").unwrap().is_none());

        store.set("key1", "value1").unwrap();
        store.set("key2", "value2").unwrap();
        store.clear().unwrap();
        assert!(store.get("key1").unwrap().is_none());
        assert!(store.get("key2").unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_directory_on_first_write() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested/store"));

        assert!(store.get("tbap_scores").unwrap().is_none());
        store.set("tbap_scores", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("tbap_scores").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert!(temp.path().join("nested/store/tbap_scores.json").exists());
    }

    #[test]
    fn test_file_store_remove_and_clear_are_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());

        store.remove("missing").unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        fs::write(temp.path().join("notes.txt"), "keep").unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.get("a").unwrap().is_none());
        assert!(temp.path().join("notes.txt").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }
}
