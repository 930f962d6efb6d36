//! Durable key-value slot.
//!
//! A flat JSON object persisted under the gate home directory. This is the
//! only persistence in the app; it currently holds a single login flag, but
//! the store itself is plain string-to-string.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// String-to-string store backed by a JSON file.
///
/// The file is read on every access; there is no in-memory cache. With a
/// single writer on a single thread that is all this app needs.
#[derive(Debug, Clone)]
pub struct KvStore {
    path: PathBuf,
}

impl KvStore {
    /// Opens the store at the default location (`${GATE_HOME}/state.json`).
    pub fn open_default() -> Self {
        Self::open(crate::config::paths::state_path())
    }

    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the value for `key`. Absent file and absent key both yield `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    /// Writes `key = value`, creating the file and its parent directory on
    /// demand.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    /// Removes `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read state from {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse state from {}", self.path.display()))
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write state to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "state file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_on_missing_file_is_none() {
        let temp = tempdir().unwrap();
        let store = KvStore::open(temp.path().join("state.json"));
        assert_eq!(store.get("logged_in").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp = tempdir().unwrap();
        let store = KvStore::open(temp.path().join("state.json"));

        store.set("logged_in", "1").unwrap();
        assert_eq!(store.get("logged_in").unwrap().as_deref(), Some("1"));

        // Other keys are untouched.
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn set_creates_missing_parent_directories() {
        let temp = tempdir().unwrap();
        let store = KvStore::open(temp.path().join("nested").join("state.json"));

        store.set("logged_in", "1").unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn remove_deletes_the_key() {
        let temp = tempdir().unwrap();
        let store = KvStore::open(temp.path().join("state.json"));

        store.set("logged_in", "1").unwrap();
        store.remove("logged_in").unwrap();
        assert_eq!(store.get("logged_in").unwrap(), None);

        // Removing again is a no-op, not an error.
        store.remove("logged_in").unwrap();
    }

    #[test]
    fn overwrite_replaces_the_value() {
        let temp = tempdir().unwrap();
        let store = KvStore::open(temp.path().join("state.json"));

        store.set("logged_in", "1").unwrap();
        store.set("logged_in", "0").unwrap();
        assert_eq!(store.get("logged_in").unwrap().as_deref(), Some("0"));
    }
}
