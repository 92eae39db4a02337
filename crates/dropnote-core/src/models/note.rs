//! Note model

use serde::{Deserialize, Serialize};

use super::Entry;
use crate::paths::last_segment;

/// Content shown while a note's body is still downloading.
pub const LOADING_PLACEHOLDER: &str = "Loading…";

/// In-memory projection of a file entry plus its text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store identifier; `None` until the note is first saved
    pub id: Option<String>,
    /// File name shown as the note title
    pub title: String,
    /// Full path; `None` for a new, never-saved note
    pub path_display: Option<String>,
    /// Revision the content was read at; `None` for a new note
    pub rev: Option<String>,
    /// Plain text content
    pub content: String,
}

impl Note {
    /// A fresh empty note that has never been saved.
    #[must_use]
    pub fn draft() -> Self {
        Self::default()
    }

    /// Placeholder displayed while `path` downloads.
    #[must_use]
    pub fn placeholder(path: &str) -> Self {
        Self {
            id: None,
            title: last_segment(path).to_string(),
            path_display: Some(path.to_string()),
            rev: None,
            content: LOADING_PLACEHOLDER.to_string(),
        }
    }

    /// Canonical note from store metadata and the content stored at that revision.
    #[must_use]
    pub fn from_entry(entry: Entry, content: impl Into<String>) -> Self {
        Self {
            id: Some(entry.id),
            title: entry.title,
            path_display: Some(entry.path_display),
            rev: entry.rev,
            content: content.into(),
        }
    }

    /// Whether the note has never been written to the store.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.path_display.is_none()
    }

    /// Get first line as a preview, truncated to `max_len` characters
    #[must_use]
    pub fn preview(&self, max_len: usize) -> String {
        self.content
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(max_len)
            .collect()
    }
}

/// Partial edit to a note. Absent fields leave the note unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NotePatch {
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: None,
        }
    }

    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: Some(content.into()),
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Shallow merge: fields present in `later` overwrite ours.
    pub fn merge(&mut self, later: Self) {
        if later.title.is_some() {
            self.title = later.title;
        }
        if later.content.is_some() {
            self.content = later.content;
        }
    }

    /// Render `note` with this patch laid over it.
    #[must_use]
    pub fn apply_to(&self, note: &Note) -> Note {
        let mut rendered = note.clone();
        if let Some(title) = &self.title {
            rendered.title.clone_from(title);
        }
        if let Some(content) = &self.content {
            rendered.content.clone_from(content);
        }
        rendered
    }
}

/// Append externally shared text to existing note content.
#[must_use]
pub fn append_shared_text(content: &str, shared: &str) -> String {
    if content.trim().is_empty() {
        shared.to_string()
    } else {
        format!("{}\n{shared}", content.trim_end_matches('\n'))
    }
}
