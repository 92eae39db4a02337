//! In-memory remote store.
//!
//! Behaves like the Dropbox store closely enough to drive the lifecycle
//! manager in tests and demos: case-insensitive paths, revision bumping on
//! every write, revision-mismatch conflicts, autorename on `add`. Failures
//! and latency can be scripted per operation, and every call is recorded.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{Download, RemoteResult, RemoteStore, WriteMode};
use crate::error::RemoteError;
use crate::models::Entry;

/// A call observed by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ListFolder(String),
    CreateFolder(String),
    Move { from: String, to: String },
    Delete(String),
    Upload {
        path: String,
        mode: WriteMode,
        content: String,
    },
    Download(String),
    Search { query: String, path: String },
}

impl StoreCall {
    /// Operation name used for scripting failures and latency.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::ListFolder(_) => "list_folder",
            Self::CreateFolder(_) => "create_folder",
            Self::Move { .. } => "move",
            Self::Delete(_) => "delete",
            Self::Upload { .. } => "upload",
            Self::Download(_) => "download",
            Self::Search { .. } => "search",
        }
    }
}

#[derive(Debug, Clone)]
struct StoredEntry {
    id: String,
    path_display: String,
    rev: Option<String>,
    content: String,
}

impl StoredEntry {
    fn to_entry(&self) -> Entry {
        match &self.rev {
            Some(rev) => Entry::file(self.id.clone(), self.path_display.clone(), rev.clone()),
            None => Entry::folder(self.id.clone(), self.path_display.clone()),
        }
    }

    const fn is_folder(&self) -> bool {
        self.rev.is_none()
    }
}

#[derive(Debug, Default)]
struct Inner {
    /// Keyed by lowercased path.
    entries: BTreeMap<String, StoredEntry>,
    next_id: u64,
    next_rev: u64,
    failures: HashMap<&'static str, VecDeque<RemoteError>>,
    latency: HashMap<&'static str, VecDeque<Duration>>,
    calls: Vec<StoreCall>,
}

impl Inner {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("id:{}", self.next_id)
    }

    fn allocate_rev(&mut self) -> String {
        self.next_rev += 1;
        format!("r{}", self.next_rev)
    }

    fn free_path(&self, path: &str) -> String {
        if !self.entries.contains_key(&path.to_lowercase()) {
            return path.to_string();
        }
        let (stem, ext) = split_extension(path);
        (1u32..)
            .map(|n| format!("{stem} ({n}){ext}"))
            .find(|candidate| !self.entries.contains_key(&candidate.to_lowercase()))
            .unwrap_or_else(|| path.to_string())
    }

    fn folder_exists(&self, path: &str) -> bool {
        path.is_empty()
            || self
                .entries
                .get(&path.to_lowercase())
                .is_some_and(StoredEntry::is_folder)
    }
}

/// In-memory [`RemoteStore`] with scripted failures and a call log.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed a file directly, bypassing the call log. Parent folders are created.
    pub fn insert_file(&self, path: &str, content: &str) -> Entry {
        let mut inner = self.lock();
        ensure_parents(&mut inner, path);
        let id = inner.allocate_id();
        let rev = inner.allocate_rev();
        let stored = StoredEntry {
            id,
            path_display: path.to_string(),
            rev: Some(rev),
            content: content.to_string(),
        };
        let entry = stored.to_entry();
        inner.entries.insert(path.to_lowercase(), stored);
        entry
    }

    /// Seed a folder directly, bypassing the call log.
    pub fn insert_folder(&self, path: &str) -> Entry {
        let mut inner = self.lock();
        ensure_parents(&mut inner, path);
        let id = inner.allocate_id();
        let stored = StoredEntry {
            id,
            path_display: path.to_string(),
            rev: None,
            content: String::new(),
        };
        let entry = stored.to_entry();
        inner.entries.insert(path.to_lowercase(), stored);
        entry
    }

    /// Fail the next `times` calls of `operation` with `error`.
    pub fn fail_next(&self, operation: &'static str, times: usize, error: &RemoteError) {
        let mut inner = self.lock();
        let queue = inner.failures.entry(operation).or_default();
        queue.extend((0..times).map(|_| error.clone()));
    }

    /// Delay the next call of `operation` by `delay` (queued, one per call).
    pub fn delay_next(&self, operation: &'static str, delay: Duration) {
        self.lock()
            .latency
            .entry(operation)
            .or_default()
            .push_back(delay);
    }

    /// Calls observed so far, in issue order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Calls of one operation kind.
    pub fn calls_of(&self, operation: &str) -> Vec<StoreCall> {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .cloned()
            .collect()
    }

    /// Current content stored at `path`.
    pub fn content(&self, path: &str) -> Option<String> {
        self.lock()
            .entries
            .get(&path.to_lowercase())
            .filter(|stored| !stored.is_folder())
            .map(|stored| stored.content.clone())
    }

    /// Current revision stored at `path`.
    pub fn revision(&self, path: &str) -> Option<String> {
        self.lock()
            .entries
            .get(&path.to_lowercase())
            .and_then(|stored| stored.rev.clone())
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lock().entries.contains_key(&path.to_lowercase())
    }

    /// Record the call, then apply scripted latency and failure.
    async fn begin(&self, call: StoreCall) -> RemoteResult<()> {
        let operation = call.operation();
        let (delay, failure) = {
            let mut inner = self.lock();
            inner.calls.push(call);
            let delay = inner
                .latency
                .get_mut(operation)
                .and_then(VecDeque::pop_front);
            let failure = inner
                .failures
                .get_mut(operation)
                .and_then(VecDeque::pop_front);
            (delay, failure)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        failure.map_or(Ok(()), Err)
    }
}

impl RemoteStore for MemoryStore {
    async fn list_folder(&self, path: &str) -> RemoteResult<Vec<Entry>> {
        self.begin(StoreCall::ListFolder(path.to_string())).await?;
        let inner = self.lock();
        if !inner.folder_exists(path) {
            return Err(not_found("list_folder", path));
        }
        let parent = path.to_lowercase();
        Ok(inner
            .entries
            .iter()
            .filter(|(key, _)| parent_of(key) == parent)
            .map(|(_, stored)| stored.to_entry())
            .collect())
    }

    async fn create_folder(&self, path: &str) -> RemoteResult<()> {
        self.begin(StoreCall::CreateFolder(path.to_string())).await?;
        let mut inner = self.lock();
        if inner.entries.contains_key(&path.to_lowercase()) {
            return Err(conflict("create_folder", "path/conflict/folder/"));
        }
        if !inner.folder_exists(&parent_of(path)) {
            return Err(not_found("create_folder", path));
        }
        let id = inner.allocate_id();
        inner.entries.insert(
            path.to_lowercase(),
            StoredEntry {
                id,
                path_display: path.to_string(),
                rev: None,
                content: String::new(),
            },
        );
        Ok(())
    }

    async fn move_entry(&self, from_path: &str, to_path: &str) -> RemoteResult<Entry> {
        self.begin(StoreCall::Move {
            from: from_path.to_string(),
            to: to_path.to_string(),
        })
        .await?;
        let mut inner = self.lock();
        let from_key = from_path.to_lowercase();
        if !inner.entries.contains_key(&from_key) {
            return Err(not_found("move", from_path));
        }
        if !inner.folder_exists(&parent_of(to_path)) {
            return Err(not_found("move", to_path));
        }
        let target = inner.free_path(to_path);
        let prefix = format!("{from_key}/");
        let moved_keys = inner
            .entries
            .keys()
            .filter(|key| **key == from_key || key.starts_with(&prefix))
            .cloned()
            .collect::<Vec<_>>();

        for key in moved_keys {
            if let Some(mut stored) = inner.entries.remove(&key) {
                let suffix = &stored.path_display[from_path.len()..];
                stored.path_display = format!("{target}{suffix}");
                inner
                    .entries
                    .insert(stored.path_display.to_lowercase(), stored);
            }
        }

        inner
            .entries
            .get(&target.to_lowercase())
            .map(StoredEntry::to_entry)
            .ok_or_else(|| not_found("move", &target))
    }

    async fn delete(&self, path: &str) -> RemoteResult<()> {
        self.begin(StoreCall::Delete(path.to_string())).await?;
        let mut inner = self.lock();
        let key = path.to_lowercase();
        if inner.entries.remove(&key).is_none() {
            return Err(not_found("delete", path));
        }
        let prefix = format!("{key}/");
        inner.entries.retain(|candidate, _| !candidate.starts_with(&prefix));
        Ok(())
    }

    async fn upload(&self, path: &str, mode: &WriteMode, content: &str) -> RemoteResult<Entry> {
        self.begin(StoreCall::Upload {
            path: path.to_string(),
            mode: mode.clone(),
            content: content.to_string(),
        })
        .await?;
        let mut inner = self.lock();
        if !inner.folder_exists(&parent_of(path)) {
            return Err(not_found("upload", path));
        }

        let (key, id, path_display) = match mode {
            WriteMode::Add => {
                let free = inner.free_path(path);
                (free.to_lowercase(), inner.allocate_id(), free)
            }
            WriteMode::Update(expected) => {
                let key = path.to_lowercase();
                let Some(existing) = inner.entries.get(&key) else {
                    return Err(conflict("upload", "path/conflict/file/"));
                };
                if existing.rev.as_deref() != Some(expected.as_str()) {
                    return Err(conflict("upload", "path/conflict/file/"));
                }
                (key, existing.id.clone(), existing.path_display.clone())
            }
        };

        let rev = inner.allocate_rev();
        let stored = StoredEntry {
            id,
            path_display,
            rev: Some(rev),
            content: content.to_string(),
        };
        let entry = stored.to_entry();
        inner.entries.insert(key, stored);
        Ok(entry)
    }

    async fn download(&self, path: &str) -> RemoteResult<Download> {
        self.begin(StoreCall::Download(path.to_string())).await?;
        let inner = self.lock();
        inner
            .entries
            .get(&path.to_lowercase())
            .filter(|stored| !stored.is_folder())
            .map(|stored| Download {
                entry: stored.to_entry(),
                content: stored.content.clone(),
            })
            .ok_or_else(|| not_found("download", path))
    }

    async fn search(
        &self,
        query: &str,
        path: &str,
        max_results: usize,
    ) -> RemoteResult<Vec<Entry>> {
        self.begin(StoreCall::Search {
            query: query.to_string(),
            path: path.to_string(),
        })
        .await?;
        let inner = self.lock();
        let needle = query.to_lowercase();
        let scope = format!("{}/", path.to_lowercase());
        Ok(inner
            .entries
            .iter()
            .filter(|(key, _)| path.is_empty() || key.starts_with(&scope))
            .filter(|(key, stored)| {
                key.rsplit('/').next().is_some_and(|name| name.contains(&needle))
                    || stored.content.to_lowercase().contains(&needle)
            })
            .take(max_results)
            .map(|(_, stored)| stored.to_entry())
            .collect())
    }
}

fn ensure_parents(inner: &mut Inner, path: &str) {
    let mut parent = parent_of(path);
    let mut missing = Vec::new();
    while !parent.is_empty() && !inner.entries.contains_key(&parent.to_lowercase()) {
        missing.push(parent.clone());
        parent = parent_of(&parent);
    }
    for folder in missing.into_iter().rev() {
        let id = inner.allocate_id();
        inner.entries.insert(
            folder.to_lowercase(),
            StoredEntry {
                id,
                path_display: folder,
                rev: None,
                content: String::new(),
            },
        );
    }
}

fn parent_of(path: &str) -> String {
    path.rsplit_once('/')
        .map_or_else(String::new, |(parent, _)| parent.to_string())
}

fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind('/').map_or(0, |index| index + 1);
    match path[name_start..].rfind('.') {
        Some(dot) if dot > 0 => path.split_at(name_start + dot),
        _ => (path, ""),
    }
}

fn not_found(operation: &str, path: &str) -> RemoteError {
    RemoteError::new(
        operation,
        Some(409),
        format!("path/not_found/ ({path})"),
    )
}

fn conflict(operation: &str, summary: &str) -> RemoteError {
    RemoteError::new(operation, Some(409), summary)
}
