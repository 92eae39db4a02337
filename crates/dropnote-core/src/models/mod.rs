//! Data models for Dropnote

mod entry;
mod note;

pub(crate) use entry::{WireFileMetadata, WireMetadata};
pub use entry::Entry;
pub use note::{append_shared_text, Note, NotePatch, LOADING_PLACEHOLDER};
