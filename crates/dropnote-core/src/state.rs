//! Shared state types observed by front ends.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::models::{Entry, Note};

/// Editing state of the open note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum EditorState {
    /// Content is downloading; a placeholder is shown
    Loading,
    /// Displayed note equals the last loaded or saved note
    Clean,
    /// Local edits are pending
    Dirty,
    /// A save is in flight
    Saving,
    /// The last load or save exhausted its retries
    Failed(String),
}

/// Foreground/background signal delivered by the host platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppActivity {
    Active,
    Background,
}

/// Plain state the UI layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Folder currently shown
    pub path: String,
    /// Folder listing, or search matches while a query is active
    pub items: Vec<Entry>,
    /// Open note with pending edits applied
    pub note: Option<Note>,
    pub editor: Option<EditorState>,
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub search_query: Option<String>,
}

/// Counter of remote operations that outlived the busy threshold.
///
/// Drives the refreshing indicator; cloning shares the counter.
#[derive(Clone, Debug, Default)]
pub struct ActivityTracker {
    pending: Arc<AtomicUsize>,
    slow_operations: Arc<AtomicUsize>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.slow_operations.fetch_add(1, Ordering::SeqCst);
    }

    pub fn end(&self) {
        let previous = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |pending| {
                pending.checked_sub(1)
            });
        if previous.is_err() {
            tracing::warn!("Activity counter ended more operations than it began");
        }
    }

    /// Operations currently shown as in progress.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn is_busy(&self) -> bool {
        self.pending() > 0
    }

    /// Total operations that ever crossed the busy threshold.
    pub fn slow_operations(&self) -> usize {
        self.slow_operations.load(Ordering::SeqCst)
    }

    /// [`Self::begin`], with the matching [`Self::end`] run when the guard
    /// drops, including when the operation is cancelled.
    pub fn track(&self) -> ActivityGuard<'_> {
        self.begin();
        ActivityGuard { tracker: self }
    }
}

/// Holds one pending operation on an [`ActivityTracker`].
#[derive(Debug)]
#[must_use = "the operation ends as soon as the guard is dropped"]
pub struct ActivityGuard<'a> {
    tracker: &'a ActivityTracker,
}

impl Drop for ActivityGuard<'_> {
    fn drop(&mut self) {
        self.tracker.end();
    }
}
