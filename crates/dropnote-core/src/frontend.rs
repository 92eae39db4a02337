//! Interface to the UI layer.
//!
//! Front ends receive transient notices (toasts) and share requests through
//! this trait; everything else they read from [`crate::state::ViewState`].

use std::fmt;
use std::sync::{Mutex, PoisonError};

use crate::models::Note;

/// Transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A remote call failed and will be retried after `seconds`
    Retrying {
        operation: String,
        attempt: u32,
        seconds: u64,
    },
    /// Saving the open note failed after all retries
    SaveFailed { message: String },
    /// Loading a note failed after all retries
    LoadFailed { message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retrying { seconds, .. } => write!(f, "Retrying in {seconds}s"),
            Self::SaveFailed { message } => write!(f, "Could not save note: {message}"),
            Self::LoadFailed { message } => write!(f, "Could not load note: {message}"),
        }
    }
}

/// Callbacks into the UI layer. All methods default to doing nothing.
pub trait Frontend: Send + Sync {
    fn notify(&self, _notice: Notice) {}

    /// Hand a note to the platform share sheet.
    fn share(&self, _note: &Note) {}
}

/// Front end that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFrontend;

impl Frontend for NoopFrontend {}

/// Front end that records what it receives, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    notices: Mutex<Vec<Notice>>,
    shared: Mutex<Vec<Note>>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn shared(&self) -> Vec<Note> {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Frontend for RecordingFrontend {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn share(&self, note: &Note) {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(note.clone());
    }
}
