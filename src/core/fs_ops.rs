// src/core/fs_ops.rs
//! File system helpers shared by the store and the config loader

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FsOps;

impl FsOps {
    /// Create the directory and its parents when missing
    pub fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            debug!("Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Read file, `None` when it does not exist or cannot be read
    pub fn read_file_opt(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("Could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Rewrite the whole file, creating the parent directory first
    pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        debug!("Written file: {}", path.display());
        Ok(())
    }

    /// `vacancies` -> `vacancies.json`, names already ending in `.json` are kept
    pub fn with_json_extension(name: &str) -> String {
        if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{}.json", name)
        }
    }

    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }
}
