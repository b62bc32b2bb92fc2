use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::Snippet;

/// Format version tag written into every export bundle.
pub const EXPORT_VERSION: &str = "1.0";

/// Export file structure: `{ exportDate, version, snippets }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub export_date: DateTime<Utc>,
    pub version: String,
    pub snippets: Vec<Snippet>,
}

impl ExportData {
    pub fn from_snippets(snippets: &[Snippet]) -> Self {
        Self {
            export_date: Utc::now(),
            version: EXPORT_VERSION.to_string(),
            snippets: snippets.to_vec(),
        }
    }
}

/// A user-supplied import file. Only the `snippets` array is required;
/// extra top-level fields are ignored and missing per-record fields are
/// filled with defaults (the store reassigns ids and timestamps anyway).
#[derive(Debug, Clone, Deserialize)]
pub struct ImportBundle {
    pub snippets: Vec<ImportedSnippet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Default export filename, `code-snippets-<date>.json`.
pub fn default_export_filename() -> String {
    format!("code-snippets-{}.json", Utc::now().format("%Y-%m-%d"))
}

/// Writes an export bundle as pretty-printed JSON.
pub fn write_export_file(data: &ExportData, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(data)
        .context("Failed to serialize export bundle")
        .map_err(StoreError::Persist)?;

    fs::write(path, json)
        .context("Failed to write export file")
        .map_err(StoreError::Persist)
}

/// Reads and parses an import file. Unreadable files, non-JSON content,
/// and bundles without a `snippets` array all report as format errors.
pub fn read_import_file(path: &Path) -> Result<ImportBundle, StoreError> {
    let content = fs::read_to_string(path)
        .map_err(|err| StoreError::Format(format!("cannot read {}: {err}", path.display())))?;

    parse_import(&content)
}

pub fn parse_import(content: &str) -> Result<ImportBundle, StoreError> {
    serde_json::from_str(content).map_err(|err| StoreError::Format(err.to_string()))
}
