// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

/// Upper bound on stored recent searches.
pub const MAX_RECENT_SEARCHES: usize = 5;

#[derive(Debug, Error)]
pub enum RecencyStoreError {
    #[error("Could not persist recent searches: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not encode recent searches: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence for the recent-search shortcuts.
///
/// `load` must never fail: an unreadable or corrupt store degrades to
/// an empty list.
pub trait RecencyStore: Send + Sync {
    fn load(&self) -> Vec<String>;
    fn save(&self, entries: &[String]) -> Result<(), RecencyStoreError>;
    fn clear(&self) -> Result<(), RecencyStoreError>;
}

/// Move `title` to the front of `entries`, dropping any earlier
/// occurrence and anything beyond the cap.
pub fn promote(entries: &mut Vec<String>, title: &str) {
    entries.retain(|entry| entry != title);
    entries.insert(0, title.to_string());
    entries.truncate(MAX_RECENT_SEARCHES);
}

/// Stores the list as a JSON array in a single file, overwritten
/// wholesale on every mutation.
pub struct FileRecencyStore {
    path: PathBuf,
}

impl FileRecencyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecencyStore for FileRecencyStore {
    fn load(&self) -> Vec<String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Discarding corrupt recent-search store {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[String]) -> Result<(), RecencyStoreError> {
        fs::write(&self.path, serde_json::to_string(entries)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), RecencyStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Keeps the list in memory only; used by tests and by shells without
/// a writable profile.
#[derive(Default)]
pub struct MemoryRecencyStore {
    entries: Mutex<Vec<String>>,
}

impl RecencyStore for MemoryRecencyStore {
    fn load(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    fn save(&self, entries: &[String]) -> Result<(), RecencyStoreError> {
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<(), RecencyStoreError> {
        self.entries.lock().clear();
        Ok(())
    }
}
