use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::PartnershipInputs;

const FALLBACK_SLUG: &str = "projeto";

/// Export of the raw inputs at the moment the analyst pressed save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnershipSnapshot {
    pub saved_at: DateTime<Utc>,
    pub inputs: PartnershipInputs,
}

impl PartnershipSnapshot {
    pub fn new(inputs: PartnershipInputs, saved_at: DateTime<Utc>) -> Self {
        Self { saved_at, inputs }
    }

    /// `go-nogo-<project slug>-<YYYY-MM-DD>.json`
    pub fn file_name(&self) -> String {
        format!(
            "go-nogo-{}-{}.json",
            slug(&self.inputs.project.name),
            self.saved_at.format("%Y-%m-%d")
        )
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Where a snapshot ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSnapshot {
    pub file_name: String,
    pub saved_at: DateTime<Utc>,
}

/// Storage abstraction so the service can be exercised without touching disk.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: &PartnershipSnapshot) -> Result<SavedSnapshot, SnapshotError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write snapshot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Writes pretty JSON files into one directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &PartnershipSnapshot) -> Result<SavedSnapshot, SnapshotError> {
        let json = snapshot.to_json()?;
        fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let file_name = snapshot.file_name();
        let path = self.dir.join(&file_name);
        fs::write(&path, json).map_err(|source| SnapshotError::Write { path, source })?;

        Ok(SavedSnapshot {
            file_name,
            saved_at: snapshot.saved_at,
        })
    }
}

/// Keeps serialized snapshots keyed by file name; a later save with the same name replaces it.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    files: Mutex<BTreeMap<String, String>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<String> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(file_name).cloned())
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, snapshot: &PartnershipSnapshot) -> Result<SavedSnapshot, SnapshotError> {
        let json = snapshot.to_json()?;
        let file_name = snapshot.file_name();
        let mut files = self
            .files
            .lock()
            .map_err(|_| SnapshotError::Unavailable("snapshot store lock poisoned".into()))?;
        files.insert(file_name.clone(), json);

        Ok(SavedSnapshot {
            file_name,
            saved_at: snapshot.saved_at,
        })
    }
}

/// Lowercase ASCII slug; runs of anything else collapse into a single `-`.
pub fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_folds_accents_and_collapses_separators() {
        assert_eq!(slug("Residencial Vista do Mar"), "residencial-vista-do-mar");
        assert_eq!(slug("  Edifício São João -- Torre 2 "), "edificio-sao-joao-torre-2");
        assert_eq!(slug(""), "projeto");
        assert_eq!(slug("***"), "projeto");
    }
}
