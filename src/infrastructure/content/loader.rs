// Copyright (c) 2026 Riara University
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

/// Load one collection from a YAML file under the content directory.
///
/// Returns `None` when the file is missing or malformed so the caller
/// can fall back to the built-in fixtures for that collection.
pub fn load_collection<T>(dir: &Path, file_name: &str) -> Option<Vec<T>>
where
    T: DeserializeOwned,
{
    let path = dir.join(file_name);
    let raw = fs::read_to_string(&path).ok()?;

    match serde_yaml::from_str::<Vec<T>>(&raw) {
        Ok(records) => {
            info!("Loaded {} records from {}", records.len(), path.display());
            Some(records)
        }
        Err(e) => {
            warn!("Ignoring malformed content file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::schools::School;

    #[test]
    fn missing_files_yield_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Vec<School>> = load_collection(dir.path(), "schools.yaml");
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_yaml_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("schools.yaml"), "][ not yaml").unwrap();
        let loaded: Option<Vec<School>> = load_collection(dir.path(), "schools.yaml");
        assert!(loaded.is_none());
    }

    #[test]
    fn well_formed_yaml_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("schools.yaml"),
            "- id: 1\n  name: School of Music\n",
        )
        .unwrap();
        let loaded: Vec<School> = load_collection(dir.path(), "schools.yaml").unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "School of Music");
    }
}
