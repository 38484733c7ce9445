// src/store.rs
//! JSON file store of accumulated vacancies.
//!
//! The file holds `{"vacancies": [...]}` with wire-shaped entries. Entries are
//! identified by `(name, alternate_url)`; every mutation rewrites the whole file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::FsOps;
use crate::types::{Vacancy, WireVacancy};

/// Stored entries are kept as raw JSON so that rewriting the file never
/// alters entries written by someone else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub vacancies: Vec<Value>,
}

impl StoreDocument {
    /// Entries that parse as wire records, in file order
    pub fn records(&self) -> Vec<WireVacancy> {
        self.vacancies
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect()
    }

    /// Keys of every stored entry, including entries that no longer parse as
    /// wire records
    fn keys(&self) -> HashSet<(String, String)> {
        self.vacancies.iter().filter_map(entry_key).collect()
    }
}

/// `(name, alternate_url)` read straight from a stored entry, with the same
/// `title`/`url` fallback as [`WireVacancy::natural_key`]
fn entry_key(entry: &Value) -> Option<(String, String)> {
    let text = |field: &str| entry.get(field).and_then(Value::as_str);

    let name = text("name").or_else(|| text("title"))?;
    let url = text("alternate_url").or_else(|| text("url"))?;
    Some((name.to_string(), url.to_string()))
}

pub struct JsonSaver {
    path: PathBuf,
}

impl JsonSaver {
    pub fn new(data_dir: impl Into<PathBuf>, filename: &str) -> Self {
        let path = data_dir.into().join(FsOps::with_json_extension(filename));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document. A missing or unreadable file reads as an empty store.
    pub fn read(&self) -> StoreDocument {
        let Some(content) = FsOps::read_file_opt(&self.path) else {
            return StoreDocument::default();
        };

        match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                warn!(
                    "Store file {} is not valid, treating it as empty: {}",
                    self.path.display(),
                    e
                );
                StoreDocument::default()
            }
        }
    }

    /// Append the records of `batch` that are not stored yet. Returns how many
    /// were appended.
    pub fn save(&self, batch: &[WireVacancy]) -> Result<usize> {
        let mut document = self.read();
        let mut seen = document.keys();
        let mut added = 0;

        for raw in batch {
            let Some(vacancy) = Vacancy::from_wire(raw) else {
                warn!("Skipping vacancy without name or url: {:?}", raw.title());
                continue;
            };

            let (name, url) = vacancy.natural_key();
            if seen.insert((name.to_string(), url.to_string())) {
                let entry = serde_json::to_value(vacancy.to_wire())
                    .context("Failed to serialize vacancy")?;
                document.vacancies.push(entry);
                added += 1;
            } else {
                debug!("Already stored: {} ({})", name, url);
            }
        }

        self.write(&document)?;
        info!(
            "Saved {} new vacancies to {} ({} total)",
            added,
            self.path.display(),
            document.vacancies.len()
        );
        Ok(added)
    }

    /// Append one wire-shaped record exactly as given. Anything that is not a JSON
    /// object with a name and url is ignored with a warning.
    pub fn add(&self, value: &Value) -> Result<bool> {
        if !value.is_object() {
            warn!("Only vacancy objects can be added to the store, got: {}", value);
            return Ok(false);
        }

        let vacancy: WireVacancy = match serde_json::from_value(value.clone()) {
            Ok(vacancy) => vacancy,
            Err(e) => {
                warn!("Ignoring value that is not a vacancy record: {}", e);
                return Ok(false);
            }
        };

        let Some((name, url)) = vacancy.natural_key() else {
            warn!("Ignoring vacancy record without name or url");
            return Ok(false);
        };

        let mut document = self.read();
        if document.keys().contains(&(name.to_string(), url.to_string())) {
            debug!("Vacancy already stored: {} ({})", name, url);
            return Ok(false);
        }

        info!("Adding vacancy {} ({})", name, url);
        document.vacancies.push(value.clone());
        self.write(&document)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.write(&StoreDocument::default())?;
        info!("Cleared store {}", self.path.display());
        Ok(())
    }

    fn write(&self, document: &StoreDocument) -> Result<()> {
        let content =
            serde_json::to_string_pretty(document).context("Failed to serialize store document")?;
        FsOps::write_file_safe(&self.path, &content)
    }
}
