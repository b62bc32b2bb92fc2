pub mod export;
pub mod snippet;
pub mod storage;
pub mod store;

pub use export::{ExportData, ImportBundle};
pub use snippet::Snippet;
pub use storage::StorageManager;
pub use store::SnippetStore;
