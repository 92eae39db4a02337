//! dropnote-core - Core library for Dropnote
//!
//! Notes are plain text files in a remote, versioned file store. This crate
//! holds the models, the store client, and the engine that keeps the one
//! note being edited in step with the store: retried remote calls, cached
//! folder listings, a single dirty-note buffer and rename-on-save.

pub mod buffer;
pub mod cache;
pub mod config;
pub mod error;
pub mod frontend;
pub mod models;
pub mod paths;
pub mod remote;
pub mod retry;
pub mod search;
pub mod state;
pub mod util;
pub mod workspace;

pub use config::ClientConfig;
pub use error::{Error, RemoteError, Result};
pub use frontend::{Frontend, NoopFrontend, Notice};
pub use models::{Entry, Note, NotePatch};
pub use remote::{DropboxClient, MemoryStore, RemoteStore, WriteMode};
pub use state::{AppActivity, EditorState, ViewState};
pub use workspace::{Workspace, WorkspaceOptions};
