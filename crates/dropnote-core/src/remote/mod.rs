//! Remote file-store abstraction.
//!
//! One async operation per remote capability. Implementations never retry;
//! wrap calls in [`crate::retry::RetryExecutor`] for that.

mod dropbox;
pub mod memory;

pub use dropbox::DropboxClient;
pub use memory::MemoryStore;

use serde::Serialize;

use crate::error::RemoteError;
use crate::models::Entry;

/// Result of a remote call.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Write precondition for uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = ".tag", content = "update", rename_all = "snake_case")]
pub enum WriteMode {
    /// Create a new file; the store autorenames when the path is taken.
    Add,
    /// Overwrite only if the stored revision still equals this one.
    Update(String),
}

impl WriteMode {
    /// `Update(rev)` when a revision is known, `Add` otherwise.
    pub fn for_revision(rev: Option<&str>) -> Self {
        rev.map_or(Self::Add, |rev| Self::Update(rev.to_string()))
    }
}

/// Downloaded file: metadata spliced together with the raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub entry: Entry,
    pub content: String,
}

/// Typed request/response surface of the remote file store.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    /// List the direct children of `path` (`""` is the root).
    async fn list_folder(&self, path: &str) -> RemoteResult<Vec<Entry>>;

    /// Create a folder at `path`.
    async fn create_folder(&self, path: &str) -> RemoteResult<()>;

    /// Move or rename an entry, returning its new metadata.
    async fn move_entry(&self, from_path: &str, to_path: &str) -> RemoteResult<Entry>;

    /// Delete the entry at `path`.
    async fn delete(&self, path: &str) -> RemoteResult<()>;

    /// Write `content` to `path` under the given precondition.
    async fn upload(&self, path: &str, mode: &WriteMode, content: &str) -> RemoteResult<Entry>;

    /// Fetch a file's metadata and content.
    async fn download(&self, path: &str) -> RemoteResult<Download>;

    /// Search names and content below `path`.
    async fn search(&self, query: &str, path: &str, max_results: usize)
        -> RemoteResult<Vec<Entry>>;
}
