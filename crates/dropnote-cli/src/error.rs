use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] dropnote_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No note content provided")]
    EmptyContent,
    #[error("Edited note content cannot be empty")]
    EmptyEditedContent,
    #[error("Note path cannot be empty")]
    EmptyNotePath,
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Search query cannot be empty")]
    EmptySearchQuery,
    #[error("Editor command failed: {0}")]
    EditorFailed(String),
    #[error(
        "Dropnote is not configured. Set DROPNOTE_ACCESS_TOKEN or write {0} with an accessToken."
    )]
    NotConfigured(String),
}
