use thiserror::Error;

/// Errors produced by snippet store operations.
/// All of these are recoverable: the CLI reports them as a notice
/// and carries on.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty after trimming
    #[error("Validation failed: {field} must not be empty")]
    Validation { field: &'static str },

    /// Malformed import file (not JSON, or missing/wrong-typed `snippets`)
    #[error("Invalid import file: {0}")]
    Format(String),

    /// Clipboard copy failed (missing tools, tool error)
    #[error("Clipboard copy failed: {0}")]
    Clipboard(String),

    /// Writing the persisted slot or an export file failed
    #[error("Failed to write snippets: {0}")]
    Persist(anyhow::Error),
}
