use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single stored code snippet with its metadata.
/// Serialized camelCase so the persisted slot and export files use the
/// same field names (`createdAt`) as the documented wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub language: Option<String>,
    pub code: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    pub fn new(title: String, language: Option<String>, code: String, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            language,
            code,
            tags,
            created_at: Utc::now(),
        }
    }

    /// Splits a raw comma-separated tag string into trimmed tags,
    /// dropping empty pieces.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Case-insensitive substring match over title, code, every tag,
    /// and the language. The query must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.code.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
            || self
                .language
                .as_ref()
                .is_some_and(|lang| lang.to_lowercase().contains(query))
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}
