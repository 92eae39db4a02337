//! Remote folder/file entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::paths::last_segment;

/// A folder or file within the remote store (metadata only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque stable identifier assigned by the store
    pub id: String,
    /// Whether this entry is a folder
    pub is_folder: bool,
    /// Display name (last path segment)
    pub title: String,
    /// Full case-preserving path
    pub path_display: String,
    /// Revision token, files only. Changes on every successful write.
    pub rev: Option<String>,
    /// Last server-side modification, files only
    pub server_modified: Option<DateTime<Utc>>,
}

impl Entry {
    /// Build a folder entry.
    pub fn folder(id: impl Into<String>, path_display: impl Into<String>) -> Self {
        let path_display = path_display.into();
        Self {
            id: id.into(),
            is_folder: true,
            title: last_segment(&path_display).to_string(),
            path_display,
            rev: None,
            server_modified: None,
        }
    }

    /// Build a file entry at `path_display` with revision `rev`.
    pub fn file(
        id: impl Into<String>,
        path_display: impl Into<String>,
        rev: impl Into<String>,
    ) -> Self {
        let path_display = path_display.into();
        Self {
            id: id.into(),
            is_folder: false,
            title: last_segment(&path_display).to_string(),
            path_display,
            rev: Some(rev.into()),
            server_modified: None,
        }
    }
}

/// Wire shape: `{id, ".tag": "folder"|"file", name, path_display, rev}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub(crate) enum WireMetadata {
    Folder {
        id: String,
        name: String,
        #[serde(default)]
        path_display: Option<String>,
    },
    File {
        id: String,
        name: String,
        #[serde(default)]
        path_display: Option<String>,
        rev: String,
        #[serde(default)]
        server_modified: Option<DateTime<Utc>>,
    },
    /// Deleted entries and tags this client does not know about.
    #[serde(other)]
    Other,
}

impl WireMetadata {
    /// Convert into an [`Entry`]; `None` for deleted/unknown tags.
    pub(crate) fn into_entry(self) -> Option<Entry> {
        match self {
            Self::Folder {
                id,
                name,
                path_display,
            } => Some(Entry {
                id,
                is_folder: true,
                path_display: path_display.unwrap_or_else(|| format!("/{name}")),
                title: name,
                rev: None,
                server_modified: None,
            }),
            Self::File {
                id,
                name,
                path_display,
                rev,
                server_modified,
            } => Some(Entry {
                id,
                is_folder: false,
                path_display: path_display.unwrap_or_else(|| format!("/{name}")),
                title: name,
                rev: Some(rev),
                server_modified,
            }),
            Self::Other => None,
        }
    }
}

/// File metadata as returned by upload and the download result header,
/// where the `.tag` discriminator may be absent.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireFileMetadata {
    id: String,
    name: String,
    #[serde(default)]
    path_display: Option<String>,
    rev: String,
    #[serde(default)]
    server_modified: Option<DateTime<Utc>>,
}

impl From<WireFileMetadata> for Entry {
    fn from(value: WireFileMetadata) -> Self {
        Self {
            id: value.id,
            is_folder: false,
            path_display: value
                .path_display
                .unwrap_or_else(|| format!("/{}", value.name)),
            title: value.name,
            rev: Some(value.rev),
            server_modified: value.server_modified,
        }
    }
}
