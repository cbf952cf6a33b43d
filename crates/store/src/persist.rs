//! Persistent key-value mirror for the in-memory lists.
//!
//! The mirror is the filesystem analog of browser local storage: a directory
//! of named slots, each holding one JSON-encoded array. Reads are tolerant -
//! a missing, unreadable, or corrupt slot yields the caller's default, since
//! the store cannot distinguish "no data yet" from "data lost". Writes
//! replace the whole slot through a temp-file rename, so a slot is always
//! either the old or the new complete value.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when writing a mirror slot.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The data directory could not be created.
    #[error("failed to create mirror directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A slot value could not be serialized.
    #[error("failed to encode slot {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A slot file could not be written or renamed into place.
    #[error("failed to write slot {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// A directory of named JSON slots.
#[derive(Debug, Clone)]
pub struct Mirror {
    dir: PathBuf,
}

impl Mirror {
    /// Open a mirror rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::CreateDir`] if the directory cannot be
    /// created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PersistError::CreateDir {
            dir: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Load a slot, falling back to `default` when the slot is missing or
    /// unreadable.
    ///
    /// Corrupt data is logged and treated the same as absent data.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: Vec<T>) -> Vec<T> {
        let path = self.slot_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(key, "mirror slot not present, using default");
                return default;
            }
            Err(err) => {
                warn!(key, error = %err, "failed to read mirror slot, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(rows) => rows,
            Err(err) => {
                warn!(key, error = %err, "corrupt mirror slot, using default");
                default
            }
        }
    }

    /// Replace a slot with the given rows.
    ///
    /// The slot is rewritten in full: the rows are serialized to a temp file
    /// in the same directory and renamed over the old value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if encoding or the filesystem write fails.
    pub fn save<T: Serialize>(&self, key: &str, rows: &[T]) -> Result<(), PersistError> {
        let encoded = serde_json::to_vec(rows).map_err(|source| PersistError::Encode {
            key: key.to_owned(),
            source,
        })?;

        let path = self.slot_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, &encoded)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| PersistError::Write {
                key: key.to_owned(),
                source,
            })?;
        debug!(key, bytes = encoded.len(), "mirror slot rewritten");
        Ok(())
    }

    /// Path of a slot's backing file.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory this mirror is rooted at.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn mirror() -> (tempfile::TempDir, Mirror) {
        let dir = tempfile::tempdir().unwrap();
        let mirror = Mirror::open(dir.path()).unwrap();
        (dir, mirror)
    }

    #[test]
    fn test_load_missing_slot_returns_default() {
        let (_dir, mirror) = mirror();
        let rows: Vec<String> = mirror.load("absent", vec!["fallback".to_owned()]);
        assert_eq!(rows, vec!["fallback".to_owned()]);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, mirror) = mirror();
        let rows = vec![1_u32, 2, 3];
        mirror.save("numbers", &rows).unwrap();
        assert_eq!(mirror.load::<u32>("numbers", Vec::new()), rows);
    }

    #[test]
    fn test_load_corrupt_slot_returns_default() {
        let (_dir, mirror) = mirror();
        fs::write(mirror.slot_path("broken"), "{not json").unwrap();
        let rows: Vec<u32> = mirror.load("broken", Vec::new());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_save_replaces_prior_value() {
        let (_dir, mirror) = mirror();
        mirror.save("slot", &[1_u32, 2, 3]).unwrap();
        mirror.save("slot", &[9_u32]).unwrap();
        assert_eq!(mirror.load::<u32>("slot", Vec::new()), vec![9]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (dir, mirror) = mirror();
        mirror.save("slot", &[1_u32]).unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
