//! One note being edited.

use crate::buffer::{DirtyBuffer, PendingEdit};
use crate::models::{Entry, Note, NotePatch};
use crate::paths::parent_folder;
use crate::state::EditorState;

/// The open note: canonical copy, pending edits and editor state.
///
/// `id` identifies this session (and each reload of it) so late results can
/// be matched against whatever is open when they arrive.
#[derive(Debug, Clone)]
pub(super) struct NoteSession {
    pub(super) id: u64,
    /// Last loaded or saved note; only replaced by store responses
    pub(super) note: Note,
    pub(super) buffer: DirtyBuffer,
    pub(super) editor: EditorState,
    /// Folder new or renamed notes are written to
    pub(super) folder: String,
    /// Whether `note` holds real content rather than a placeholder
    pub(super) loaded: bool,
}

impl NoteSession {
    pub(super) fn draft(id: u64, folder: String) -> Self {
        Self {
            id,
            note: Note::draft(),
            buffer: DirtyBuffer::new(),
            editor: EditorState::Clean,
            folder,
            loaded: true,
        }
    }

    pub(super) fn loading(id: u64, shown: Note, folder: &str) -> Self {
        Self {
            id,
            loaded: shown.rev.is_some(),
            note: shown,
            buffer: DirtyBuffer::new(),
            editor: EditorState::Loading,
            folder: folder.to_string(),
        }
    }

    pub(super) fn rendered(&self) -> Note {
        self.buffer.render(&self.note)
    }

    pub(super) const fn has_edits(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub(super) fn is_editable(&self) -> bool {
        self.loaded && self.editor != EditorState::Loading
    }

    pub(super) fn edit(&mut self, patch: NotePatch) {
        if patch.is_empty() {
            return;
        }
        self.buffer.update(&self.note, patch);
        if self.editor != EditorState::Saving {
            self.editor = EditorState::Dirty;
        }
    }

    pub(super) fn loaded_from(&mut self, note: Note) {
        self.note = note;
        self.loaded = true;
        self.buffer.clear();
        self.editor = EditorState::Clean;
    }

    /// Capture pending edits and enter `Saving`.
    pub(super) fn begin_save(&mut self) -> Option<PendingEdit> {
        let pending = self.buffer.take()?;
        self.editor = EditorState::Saving;
        Some(pending)
    }

    /// A rename went through; later writes target the new path.
    pub(super) fn moved_to(&mut self, moved: &Entry) {
        self.note.id = Some(moved.id.clone());
        self.note.title.clone_from(&moved.title);
        self.note.path_display = Some(moved.path_display.clone());
        if moved.rev.is_some() {
            self.note.rev.clone_from(&moved.rev);
        }
        self.folder = parent_folder(&moved.path_display).to_string();
        self.buffer.rebase(&self.note);
    }

    pub(super) fn finish_save(&mut self, saved: Note) {
        if let Some(path) = saved.path_display.as_deref() {
            self.folder = parent_folder(path).to_string();
        }
        self.note = saved;
        self.buffer.rebase(&self.note);
        self.editor = if self.buffer.is_empty() {
            EditorState::Clean
        } else {
            EditorState::Dirty
        };
    }

    pub(super) fn fail_save(&mut self, pending: PendingEdit, message: String) {
        self.buffer.restore(pending);
        self.buffer.rebase(&self.note);
        self.editor = EditorState::Failed(message);
    }
}
