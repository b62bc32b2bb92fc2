use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::export::{ExportData, ImportBundle};
use crate::models::{Snippet, StorageManager};

/// The in-memory snippet collection plus its persistence bridge.
///
/// The collection is ordered newest-first and mirrored into the
/// persisted slot after every mutation. One store instance owns the
/// slot for the life of the process; there is no global state.
#[derive(Debug)]
pub struct SnippetStore {
    snippets: Vec<Snippet>,
    storage: StorageManager,
}

impl SnippetStore {
    /// Loads the persisted collection once. An absent or malformed slot
    /// starts the store empty; the slot is only rewritten on the next
    /// mutation, never eagerly.
    pub fn open(storage: StorageManager) -> Self {
        let snippets = storage.load_snippets().unwrap_or_default();

        Self { snippets, storage }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Validates, constructs, and prepends a new snippet, then persists.
    /// Title and code must be non-empty after trimming; `tags_raw` is a
    /// comma-separated list.
    pub fn add(
        &mut self,
        title: &str,
        language: Option<&str>,
        code: &str,
        tags_raw: &str,
    ) -> Result<&Snippet, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation { field: "title" });
        }

        let code = code.trim();
        if code.is_empty() {
            return Err(StoreError::Validation { field: "code" });
        }

        let language = language
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .map(str::to_string);

        let snippet = Snippet::new(
            title.to_string(),
            language,
            code.to_string(),
            Snippet::parse_tags(tags_raw),
        );

        self.snippets.insert(0, snippet);
        self.persist()?;

        Ok(&self.snippets[0])
    }

    /// Removes the snippet with the given id and persists. An unknown id
    /// is a no-op: nothing is removed and nothing is written back.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let Some(index) = self.snippets.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        self.snippets.remove(index);
        self.persist()?;

        Ok(true)
    }

    /// Lazily filters the collection, order preserved. An empty or
    /// whitespace-only query yields every snippet unfiltered.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Snippet> + use<'a> {
        let needle = (!query.trim().is_empty()).then(|| query.to_lowercase());

        self.snippets
            .iter()
            .filter(move |snippet| needle.as_deref().is_none_or(|q| snippet.matches(q)))
    }

    /// Bundles the full current collection for export.
    pub fn export_data(&self) -> ExportData {
        ExportData::from_snippets(&self.snippets)
    }

    /// Imports a parsed bundle and persists. Every incoming record gets a
    /// fresh id (incoming ids are never trusted, so collisions with the
    /// existing collection are impossible) and a creation time of now when
    /// the file carried none. The whole batch, in file order, lands ahead
    /// of the existing snippets. Returns the count imported.
    pub fn import_bundle(&mut self, bundle: ImportBundle) -> Result<usize, StoreError> {
        let mut batch: Vec<Snippet> = bundle
            .snippets
            .into_iter()
            .map(|record| Snippet {
                id: Uuid::new_v4(),
                title: record.title,
                language: record.language,
                code: record.code,
                tags: record.tags,
                created_at: record.created_at.unwrap_or_else(Utc::now),
            })
            .collect();

        let count = batch.len();
        batch.append(&mut self.snippets);
        self.snippets = batch;
        self.persist()?;

        Ok(count)
    }

    /// Resolves a snippet by id first, then exact title match, then
    /// partial title match (case-insensitive).
    pub fn find(&self, name_or_id: &str) -> Option<&Snippet> {
        if let Ok(id) = Uuid::parse_str(name_or_id) {
            return self.snippets.iter().find(|s| s.id == id);
        }

        let name = name_or_id.to_lowercase();

        self.snippets
            .iter()
            .find(|s| s.title.to_lowercase() == name)
            .or_else(|| {
                self.snippets
                    .iter()
                    .find(|s| s.title.to_lowercase().contains(&name))
            })
    }

    /// Mirrors the full collection into the persisted slot.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.storage
            .save_snippets(&self.snippets)
            .map_err(StoreError::Persist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::export::parse_import;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (SnippetStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = StorageManager::with_data_dir(temp_dir.path().to_path_buf()).unwrap();
        (SnippetStore::open(storage), temp_dir)
    }

    fn reopen(temp_dir: &TempDir) -> SnippetStore {
        let storage = StorageManager::with_data_dir(temp_dir.path().to_path_buf()).unwrap();
        SnippetStore::open(storage)
    }

    #[test]
    fn test_add_builds_snippet_from_raw_input() {
        let (mut store, _temp) = create_test_store();

        let snippet = store
            .add("Hello", Some("js"), "console.log('hi')", "greet, demo")
            .unwrap();

        assert_eq!(snippet.title, "Hello");
        assert_eq!(snippet.language.as_deref(), Some("js"));
        assert_eq!(snippet.code, "console.log('hi')");
        assert_eq!(snippet.tags, vec!["greet", "demo"]);
    }

    #[test]
    fn test_add_rejects_empty_title_and_code() {
        let (mut store, _temp) = create_test_store();
        store.add("Keep", None, "kept", "").unwrap();

        let err = store.add("   ", None, "code", "").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "title" }));

        let err = store.add("Title", None, "  \n ", "").unwrap_err();
        assert!(matches!(err, StoreError::Validation { field: "code" }));

        // Rejected adds must not touch the collection
        assert_eq!(store.snippets().len(), 1);
        assert_eq!(store.snippets()[0].title, "Keep");
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let (mut store, temp) = create_test_store();

        store.add("First", None, "1", "").unwrap();
        store.add("Second", None, "2", "").unwrap();

        assert_eq!(store.snippets()[0].title, "Second");
        assert_eq!(store.snippets()[1].title, "First");

        let reopened = reopen(&temp);
        assert_eq!(reopened.snippets().len(), 2);
        assert_eq!(reopened.snippets()[0].title, "Second");
    }

    #[test]
    fn test_add_trims_title_code_and_blank_language() {
        let (mut store, _temp) = create_test_store();

        let snippet = store.add("  Hi  ", Some("  "), "  body  ", "").unwrap();
        assert_eq!(snippet.title, "Hi");
        assert_eq!(snippet.code, "body");
        assert!(snippet.language.is_none());
    }

    #[test]
    fn test_delete_removes_exactly_one_preserving_order() {
        let (mut store, _temp) = create_test_store();
        store.add("A", None, "a", "").unwrap();
        store.add("B", None, "b", "").unwrap();
        store.add("C", None, "c", "").unwrap();

        let id = store.snippets()[1].id;
        assert!(store.delete(id).unwrap());

        let titles: Vec<_> = store.snippets().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (mut store, _temp) = create_test_store();
        store.add("A", None, "a", "").unwrap();

        assert!(!store.delete(Uuid::new_v4()).unwrap());
        assert_eq!(store.snippets().len(), 1);
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let (mut store, _temp) = create_test_store();
        store.add("A", None, "a", "").unwrap();
        store.add("B", None, "b", "").unwrap();

        assert_eq!(store.search("").count(), 2);
        assert_eq!(store.search("   ").count(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let (mut store, _temp) = create_test_store();
        store
            .add("Hello World", Some("Rust"), "fn main() {}", "example")
            .unwrap();
        store.add("Other", None, "print('x')", "python-ish").unwrap();

        assert_eq!(store.search("HELLO").count(), 1);
        assert_eq!(store.search("fn MAIN").count(), 1);
        assert_eq!(store.search("rust").count(), 1);
        assert_eq!(store.search("PYTHON").count(), 1);
        assert_eq!(store.search("no such thing").count(), 0);
    }

    #[test]
    fn test_search_preserves_order() {
        let (mut store, _temp) = create_test_store();
        store.add("match one", None, "x", "").unwrap();
        store.add("skip", None, "y", "").unwrap();
        store.add("match two", None, "z", "").unwrap();

        let titles: Vec<_> = store.search("match").map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["match two", "match one"]);
    }

    #[test]
    fn test_import_prepends_batch_with_fresh_ids() {
        let (mut store, temp) = create_test_store();
        store.add("Existing", None, "old", "").unwrap();
        let existing_id = store.snippets()[0].id;

        let bundle = parse_import(
            r#"{"snippets": [
                {"title": "One", "code": "1"},
                {"id": "00000000-0000-0000-0000-000000000000", "title": "Two", "code": "2"}
            ]}"#,
        )
        .unwrap();

        let count = store.import_bundle(bundle).unwrap();
        assert_eq!(count, 2);

        let titles: Vec<_> = store.snippets().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two", "Existing"]);

        // Incoming ids are discarded; everything stays unique
        assert_ne!(store.snippets()[1].id, Uuid::nil());
        assert_ne!(store.snippets()[0].id, store.snippets()[1].id);
        assert_eq!(store.snippets()[2].id, existing_id);

        let reopened = reopen(&temp);
        assert_eq!(reopened.snippets().len(), 3);
    }

    #[test]
    fn test_import_fills_missing_timestamps() {
        let (mut store, _temp) = create_test_store();

        let bundle = parse_import(
            r#"{"snippets": [
                {"title": "Dated", "code": "x", "createdAt": "2023-05-01T12:00:00Z"},
                {"title": "Undated", "code": "y"}
            ]}"#,
        )
        .unwrap();

        store.import_bundle(bundle).unwrap();

        assert_eq!(
            store.snippets()[0].created_at.to_rfc3339(),
            "2023-05-01T12:00:00+00:00"
        );
        assert!(store.snippets()[1].created_at > store.snippets()[0].created_at);
    }

    #[test]
    fn test_malformed_import_leaves_collection_untouched() {
        let (mut store, _temp) = create_test_store();
        store.add("Keep", None, "kept", "").unwrap();

        let err = parse_import(r#"{"snippets": {"not": "an array"}}"#).unwrap_err();
        assert!(matches!(err, StoreError::Format(_)));

        assert_eq!(store.snippets().len(), 1);
        assert_eq!(store.snippets()[0].title, "Keep");
    }

    #[test]
    fn test_export_import_round_trip() {
        let (mut store, _temp) = create_test_store();
        store
            .add("Hello", Some("js"), "console.log('hi')", "greet, demo")
            .unwrap();

        let json = serde_json::to_string(&store.export_data()).unwrap();

        let (mut other, _other_temp) = create_test_store();
        let count = other.import_bundle(parse_import(&json).unwrap()).unwrap();
        assert_eq!(count, 1);

        let original = &store.snippets()[0];
        let imported = &other.snippets()[0];
        assert_eq!(imported.title, original.title);
        assert_eq!(imported.language, original.language);
        assert_eq!(imported.code, original.code);
        assert_eq!(imported.tags, original.tags);
        assert_ne!(imported.id, original.id);
    }

    #[test]
    fn test_find_resolves_id_then_exact_then_partial_title() {
        let (mut store, _temp) = create_test_store();
        store.add("greeting helper", None, "a", "").unwrap();
        store.add("Greeting", None, "b", "").unwrap();

        let exact = store.find("greeting").unwrap();
        assert_eq!(exact.title, "Greeting");

        let partial = store.find("helper").unwrap();
        assert_eq!(partial.title, "greeting helper");

        let by_id = store.find(&store.snippets()[1].id.to_string()).unwrap();
        assert_eq!(by_id.title, "greeting helper");

        assert!(store.find("nothing").is_none());
    }

    #[test]
    fn test_open_with_malformed_slot_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("snippets.json"), "{ corrupt").unwrap();

        let store = reopen(&temp_dir);
        assert!(store.snippets().is_empty());

        // Corrupt slot survives until the next mutation overwrites it
        let content = fs::read_to_string(temp_dir.path().join("snippets.json")).unwrap();
        assert_eq!(content, "{ corrupt");
    }
}
