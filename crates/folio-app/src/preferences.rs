//! Persistent key-value preference storage
//!
//! Holds the single explicit theme choice across runs. Stored as a flat TOML
//! table of string values in `preferences.toml`.

use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use folio_core::prelude::*;
use fs2::FileExt;

/// File name of the preference store inside the config directory
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

const PREFERENCES_HEADER: &str = "# folio user preferences (written by the app)\n\n";

/// Client-local key-value storage
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File-backed store
// ─────────────────────────────────────────────────────────────────────────────

/// Preference store backed by a TOML file
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/preferences.toml`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        parse_entries(&content)
    }

    /// Read-modify-write under an exclusive lock
    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::preferences(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| Error::preferences(format!("Failed to open preferences: {}", e)))?;

        // Released when `file` is dropped
        file.try_lock_exclusive().map_err(|e| {
            if e.kind() == fs2::lock_contended_error().kind() {
                Error::PreferencesLocked {
                    path: self.path.clone(),
                }
            } else {
                Error::preferences(format!("Failed to lock preferences: {}", e))
            }
        })?;

        let mut entries = read_locked(&mut file)?;
        f(&mut entries);

        let body = toml::to_string_pretty(&entries)?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(PREFERENCES_HEADER.as_bytes())?;
        file.write_all(body.as_bytes())?;
        file.flush()?;

        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

fn read_locked(file: &mut File) -> Result<BTreeMap<String, String>> {
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    match parse_entries(&content) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            warn!("Discarding unreadable preferences: {}", e);
            Ok(BTreeMap::new())
        }
    }
}

/// Parse a preference file, keeping only string values
fn parse_entries(content: &str) -> Result<BTreeMap<String, String>> {
    let table: toml::Table = toml::from_str(content)?;
    Ok(table
        .into_iter()
        .filter_map(|(key, value)| match value {
            toml::Value::String(s) => Some((key, s)),
            other => {
                warn!("Ignoring non-string preference {} = {}", key, other);
                None
            }
        })
        .collect())
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory store
// ─────────────────────────────────────────────────────────────────────────────

/// Preference store that forgets everything on exit
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
