//! Durable key-value storage for scripts and preferences.
//!
//! Each logical key is a plain UTF-8 file in the store directory
//! (default: `~/.local/share/crabprompt/store/`). The `scripts` key holds
//! the full ordered script list serialized as a JSON array; writes always
//! re-serialize and overwrite the whole list. Script counts are small
//! (human-authored speech scripts), so whole-list rewrites are fine.

pub mod prefs;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Key holding the serialized script list.
pub const SCRIPTS_KEY: &str = "scripts";
/// Key holding the stringified font size preference.
pub const FONT_SIZE_KEY: &str = "fontSize";
/// Key holding the stringified scrolling speed preference.
pub const SCROLLING_SPEED_KEY: &str = "scrollingSpeed";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored script list is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("script index {index} out of range (list has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// File-per-key store for the script list and preference values.
pub struct ScriptStore {
    dir: PathBuf,
}

impl ScriptStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Read the raw string value stored under `key`, or `None` if the key
    /// has never been written.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the raw string value stored under `key`, replacing any
    /// previous value.
    pub fn set_value(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        debug!(key, "store value written");
        Ok(())
    }

    /// The full persisted script list, in insertion order. Empty if the
    /// `scripts` key has never been written.
    pub fn list_scripts(&self) -> Result<Vec<String>> {
        match self.get_value(SCRIPTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Append `text` to the persisted list and return the updated list.
    /// The empty string is a valid script.
    pub fn add_script(&self, text: &str) -> Result<Vec<String>> {
        let mut scripts = self.list_scripts()?;
        scripts.push(text.to_string());
        self.write_scripts(&scripts)?;
        debug!(count = scripts.len(), "script appended");
        Ok(scripts)
    }

    /// Remove the entry at the 0-based `index`, preserving the order of the
    /// remaining entries, and return the updated list.
    ///
    /// An out-of-range index is rejected with [`StoreError::IndexOutOfRange`]
    /// and the persisted list is left untouched.
    pub fn remove_script(&self, index: usize) -> Result<Vec<String>> {
        let mut scripts = self.list_scripts()?;
        if index >= scripts.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: scripts.len(),
            });
        }
        scripts.remove(index);
        self.write_scripts(&scripts)?;
        debug!(index, count = scripts.len(), "script removed");
        Ok(scripts)
    }

    fn write_scripts(&self, scripts: &[String]) -> Result<()> {
        let json = serde_json::to_string(scripts)?;
        self.set_value(SCRIPTS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, ScriptStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ScriptStore::open(dir.path().join("store")).unwrap();
        (dir, store)
    }

    #[test]
    fn fresh_store_lists_empty() {
        let (_dir, store) = temp_store();
        assert_eq!(store.list_scripts().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let (_dir, store) = temp_store();
        store.add_script("A").unwrap();
        store.add_script("B").unwrap();
        let updated = store.add_script("C").unwrap();
        assert_eq!(updated, ["A", "B", "C"]);
        assert_eq!(store.list_scripts().unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let (_dir, store) = temp_store();
        for s in ["A", "B", "C"] {
            store.add_script(s).unwrap();
        }
        assert_eq!(store.remove_script(1).unwrap(), ["A", "C"]);
        assert_eq!(store.list_scripts().unwrap(), ["A", "C"]);
    }

    #[test]
    fn remove_out_of_range_is_rejected_and_list_untouched() {
        let (_dir, store) = temp_store();
        store.add_script("A").unwrap();
        let err = store.remove_script(5).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IndexOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(store.list_scripts().unwrap(), ["A"]);
    }

    #[test]
    fn list_is_idempotent_between_writes() {
        let (_dir, store) = temp_store();
        store.add_script("speech").unwrap();
        let first = store.list_scripts().unwrap();
        let second = store.list_scripts().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_string_is_a_valid_script() {
        let (_dir, store) = temp_store();
        store.add_script("").unwrap();
        assert_eq!(store.list_scripts().unwrap(), [""]);
    }

    #[test]
    fn value_round_trip() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get_value(FONT_SIZE_KEY).unwrap(), None);
        store.set_value(FONT_SIZE_KEY, "42").unwrap();
        assert_eq!(
            store.get_value(FONT_SIZE_KEY).unwrap(),
            Some("42".to_string())
        );
    }
}
