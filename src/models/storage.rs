use crate::models::Snippet;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage manager for the persisted snippet slot.
/// The whole collection lives in a single JSON file; every save
/// overwrites it completely.
#[derive(Debug)]
pub struct StorageManager {
    store_file: PathBuf,
}

impl StorageManager {
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("snipstash");

        Self::with_data_dir(data_dir)
    }

    /// Builds a manager rooted at an explicit directory, creating it
    /// if needed. Tests use this with a temp dir.
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self {
            store_file: data_dir.join("snippets.json"),
        })
    }

    /// Reads the full collection from the slot. An absent file is an
    /// empty collection; unreadable or malformed content is an error
    /// (callers decide whether to recover).
    pub fn load_snippets(&self) -> Result<Vec<Snippet>> {
        if !self.store_file.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&self.store_file).context("Failed to read snippet store")?;

        serde_json::from_str(&content).context("Failed to parse snippet store JSON")
    }

    /// Overwrites the slot with the full collection. No merge.
    pub fn save_snippets(&self, snippets: &[Snippet]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(snippets).context("Failed to serialize snippets")?;

        fs::write(&self.store_file, content).context("Failed to write snippet store")
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }
}
