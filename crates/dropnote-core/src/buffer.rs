//! Pending local edits for the open note.

use std::mem;

use crate::models::{Note, NotePatch};
use crate::paths::ensure_extension;

/// Edits captured at the start of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    /// Canonical note the edits were made against
    pub note: Note,
    pub patch: NotePatch,
}

impl PendingEdit {
    /// The note as it should look once saved.
    #[must_use]
    pub fn rendered(&self) -> Note {
        self.patch.apply_to(&self.note)
    }

    /// Whether the patch renames a note that already had a title.
    ///
    /// Titles are compared as file names, so `b` does not rename `b.md`.
    pub fn is_rename(&self) -> bool {
        self.patch.title.as_deref().map(str::trim).is_some_and(|title| {
            !title.is_empty()
                && !self.note.title.is_empty()
                && ensure_extension(title) != self.note.title
        })
    }
}

/// At most one pending patch over the canonical note.
///
/// A non-empty buffer means there are edits the store has not seen. The
/// canonical note is never mutated here; patches are only laid over it for
/// rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyBuffer {
    note: Option<Note>,
    patch: NotePatch,
}

impl DirtyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `patch` over whatever is already pending.
    pub fn update(&mut self, canonical: &Note, patch: NotePatch) {
        self.note = Some(canonical.clone());
        self.patch.merge(patch);
    }

    pub const fn is_empty(&self) -> bool {
        self.patch.is_empty()
    }

    /// The pending patch, for inspection.
    pub const fn patch(&self) -> &NotePatch {
        &self.patch
    }

    /// Capture and clear the buffer in one step.
    ///
    /// Returns `None` when nothing is pending. Edits made after this call
    /// start a new buffer and are not part of the captured edit.
    pub fn take(&mut self) -> Option<PendingEdit> {
        let note = self.note.take();
        let patch = mem::take(&mut self.patch);
        if patch.is_empty() {
            return None;
        }
        note.map(|note| PendingEdit { note, patch })
    }

    /// Put a failed save's edits back, underneath anything typed since.
    pub fn restore(&mut self, pending: PendingEdit) {
        let mut patch = pending.patch;
        patch.merge(mem::take(&mut self.patch));
        self.patch = patch;
        if self.note.is_none() {
            self.note = Some(pending.note);
        }
    }

    /// Point pending edits at a newer canonical note.
    pub fn rebase(&mut self, canonical: &Note) {
        if self.note.is_some() {
            self.note = Some(canonical.clone());
        }
    }

    /// `canonical` with pending edits applied.
    #[must_use]
    pub fn render(&self, canonical: &Note) -> Note {
        self.patch.apply_to(canonical)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
