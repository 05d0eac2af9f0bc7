// src/store.rs
//! Preference store: string key → bool, default when absent.
//!
//! The pipeline only sees the `PreferenceStore` trait. `FilePrefs` keeps the
//! map in `.store/prefs.json` and rewrites it on every `set`; write failures
//! are logged and otherwise ignored. `MemoryPrefs` is for tests and previews.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FlagsError;

pub trait PreferenceStore {
    fn get(&self, key: &str, default: bool) -> bool;

    /// Fire-and-forget.
    fn set(&mut self, key: &str, value: bool);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    values: BTreeMap<String, bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self { Self::default() }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.values.insert(s!(key), value);
    }
}

#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl FilePrefs {
    /// Load from `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_map(&path) {
            Ok(v) => {
                logd!("Prefs: loaded {} key(s) from {}", v.len(), path.display());
                v
            }
            Err(FlagsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                loge!("Prefs: ignoring {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path { &self.path }

    fn save(&self) -> Result<(), FlagsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

fn read_map(path: &Path) -> Result<BTreeMap<String, bool>, FlagsError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set(&mut self, key: &str, value: bool) {
        self.values.insert(s!(key), value);
        match self.save() {
            Ok(()) => logd!("Prefs: {key} = {value}"),
            Err(e) => loge!("Prefs: save to {} failed: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp(name: &str) -> PathBuf {
        let p = std::env::temp_dir().join(format!("steam_flags_prefs_{name}"));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn memory_defaults_until_set() {
        let mut prefs = MemoryPrefs::new();
        assert!(prefs.get("lanMultiplayer", true));
        prefs.set("lanMultiplayer", false);
        assert!(!prefs.get("lanMultiplayer", true));
    }

    #[test]
    fn file_prefs_persist_across_opens() {
        let path = tmp("persist").join("prefs.json");
        {
            let mut prefs = FilePrefs::open(&path);
            assert!(prefs.get("onlineMultiplayer", true));
            prefs.set("onlineMultiplayer", false);
        }
        let prefs = FilePrefs::open(&path);
        assert!(!prefs.get("onlineMultiplayer", true));
        assert!(prefs.get("localMultiplayer", true));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tmp("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let prefs = FilePrefs::open(&path);
        assert!(prefs.get("localMultiplayer", true));
    }
}
