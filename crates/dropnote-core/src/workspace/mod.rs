//! Note lifecycle manager.
//!
//! A [`Workspace`] owns the remote store handle, the retry executor, the
//! folder cache and at most one editing session. UI events arrive as method
//! calls; their effects are read back through [`Workspace::snapshot`].
//!
//! State lives behind a mutex that is never held across a remote call, so
//! edits can keep arriving while a save or load is in flight. Listings and
//! loads are tagged when issued and their results are dropped when focus has
//! moved on by the time they arrive.

mod session;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use self::session::NoteSession;
use crate::buffer::PendingEdit;
use crate::cache::FolderCache;
use crate::config::ClientConfig;
use crate::frontend::{Frontend, Notice};
use crate::models::{append_shared_text, Entry, Note, NotePatch};
use crate::paths::{join_path, note_path, parent_folder};
use crate::remote::{RemoteStore, WriteMode};
use crate::retry::{RetryExecutor, RetryPolicy};
use crate::search::SearchDebouncer;
use crate::state::{ActivityTracker, AppActivity, EditorState, ViewState};
use crate::{Error, Result};

/// Tuning for a [`Workspace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceOptions {
    pub retry: RetryPolicy,
    pub search_debounce: Duration,
    pub search_max_results: usize,
    /// Folder shown first; `""` is the store root
    pub root_path: String,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            search_debounce: crate::search::DEFAULT_WINDOW,
            search_max_results: 20,
            root_path: String::new(),
        }
    }
}

impl From<&ClientConfig> for WorkspaceOptions {
    fn from(config: &ClientConfig) -> Self {
        Self {
            retry: config.retry.policy(),
            search_debounce: config.search_debounce(),
            search_max_results: config.search_max_results,
            root_path: config.root_path.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct WorkspaceState {
    path: String,
    items: Vec<Entry>,
    cache: FolderCache,
    /// Newest listing sequence applied per folder
    applied_listings: HashMap<String, u64>,
    session: Option<NoteSession>,
    /// Shared text waiting for the next note to open
    shared_text: Option<String>,
    search_query: Option<String>,
    is_loading: bool,
}

impl WorkspaceState {
    fn session_mut(&mut self, id: u64) -> Option<&mut NoteSession> {
        self.session.as_mut().filter(|session| session.id == id)
    }
}

/// Orchestrates load, edit, save, rename and refresh against one store.
pub struct Workspace<S> {
    store: S,
    executor: RetryExecutor,
    frontend: Arc<dyn Frontend>,
    search: SearchDebouncer,
    search_max_results: usize,
    sequence: AtomicU64,
    /// Serializes saves; edits do not wait on it.
    save_gate: Mutex<()>,
    state: Mutex<WorkspaceState>,
}

impl<S: RemoteStore> Workspace<S> {
    pub fn new(store: S, frontend: Arc<dyn Frontend>, options: WorkspaceOptions) -> Self {
        let executor = RetryExecutor::new(options.retry, ActivityTracker::new(), frontend.clone());
        Self {
            store,
            executor,
            frontend,
            search: SearchDebouncer::new(options.search_debounce),
            search_max_results: options.search_max_results,
            sequence: AtomicU64::new(0),
            save_gate: Mutex::new(()),
            state: Mutex::new(WorkspaceState {
                path: options.root_path,
                ..WorkspaceState::default()
            }),
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn activity(&self) -> &ActivityTracker {
        self.executor.activity()
    }

    pub async fn current_path(&self) -> String {
        self.state.lock().await.path.clone()
    }

    /// Open note with pending edits applied.
    pub async fn current_note(&self) -> Option<Note> {
        self.state
            .lock()
            .await
            .session
            .as_ref()
            .map(NoteSession::rendered)
    }

    /// Plain state for rendering.
    pub async fn snapshot(&self) -> ViewState {
        let state = self.state.lock().await;
        ViewState {
            path: state.path.clone(),
            items: state.items.clone(),
            note: state.session.as_ref().map(NoteSession::rendered),
            editor: state.session.as_ref().map(|session| session.editor.clone()),
            is_loading: state.is_loading,
            is_refreshing: self.activity().is_busy(),
            search_query: state.search_query.clone(),
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Folders

    /// Show `path`: paint its cached listing at once, then fetch a fresh one.
    pub async fn navigate_to(&self, path: &str) -> Result<Vec<Entry>> {
        {
            let mut state = self.state.lock().await;
            state.path = path.to_string();
            state.search_query = None;
            if let Some(cached) = state.cache.get(path).map(<[Entry]>::to_vec) {
                state.items = cached;
            }
        }
        self.search.cancel();
        self.list_folder(path).await
    }

    /// Fetch the listing of `path`, updating the cache and, when `path` is
    /// still on screen, the displayed items.
    ///
    /// Results older than a listing already applied for the same folder are
    /// returned to the caller but not applied.
    pub async fn list_folder(&self, path: &str) -> Result<Vec<Entry>> {
        let sequence = self.next_sequence();
        tracing::debug!(path, sequence, "Listing folder");

        let entries = self
            .executor
            .execute("list_folder", || self.store.list_folder(path))
            .await?;

        let mut state = self.state.lock().await;
        let newest = state.applied_listings.get(path).copied().unwrap_or(0);
        if sequence < newest {
            tracing::debug!(path, sequence, newest, "Discarding stale folder listing");
            return Ok(entries);
        }

        state.applied_listings.insert(path.to_string(), sequence);
        state.cache.put(path, entries.clone());
        if state.path == path && state.search_query.is_none() {
            state.items.clone_from(&entries);
        }
        tracing::debug!(path, sequence, count = entries.len(), "Applied folder listing");
        Ok(entries)
    }

    /// Re-list the folder on screen.
    pub async fn on_refresh(&self) -> Result<Vec<Entry>> {
        let path = self.current_path().await;
        self.list_folder(&path).await
    }

    /// Pull-to-refresh: drop any active search and re-list the folder.
    pub async fn on_refresh_control(&self) -> Result<Vec<Entry>> {
        self.search.cancel();
        self.state.lock().await.search_query = None;
        self.on_refresh().await
    }

    /// Create folder `name` inside the folder on screen, then refresh.
    pub async fn add_folder(&self, name: &str) -> Result<String> {
        let name = name.trim().trim_matches('/');
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "folder name must not be empty".to_string(),
            ));
        }

        let parent = self.current_path().await;
        let path = join_path(&parent, name);
        self.executor
            .execute("create_folder", || self.store.create_folder(&path))
            .await?;
        tracing::info!(path = %path, "Created folder");

        self.refresh_after_change(&parent).await;
        Ok(path)
    }

    async fn refresh_after_change(&self, path: &str) {
        if let Err(error) = self.list_folder(path).await {
            tracing::warn!(path, "Folder refresh failed: {}", error);
        }
    }

    // Notes

    /// Start editing a new, empty note in the folder on screen.
    ///
    /// Text shared from another app while no note was open becomes its
    /// content.
    pub async fn add_note(&self) -> Result<Note> {
        self.close_note().await?;

        let id = self.next_sequence();
        let mut state = self.state.lock().await;
        let mut session = NoteSession::draft(id, state.path.clone());
        if let Some(shared) = state.shared_text.take() {
            session.edit(NotePatch::content(shared));
        }
        let rendered = session.rendered();
        state.session = Some(session);
        state.is_loading = false;
        Ok(rendered)
    }

    /// Open the note at `path`, saving the current note first if needed.
    pub async fn edit_note(&self, path: &str) -> Result<Note> {
        self.close_note().await?;
        self.load(path, Note::placeholder(path)).await
    }

    /// Fetch the open note again, discarding nothing: fails if it has edits.
    pub async fn reload_note(&self) -> Result<Note> {
        let (path, shown) = {
            let state = self.state.lock().await;
            let session = state.session.as_ref().ok_or(Error::NoActiveNote)?;
            if session.has_edits() || session.editor == EditorState::Saving {
                return Err(Error::InvalidInput(
                    "the open note has unsaved edits".to_string(),
                ));
            }
            let path = session
                .note
                .path_display
                .clone()
                .ok_or_else(|| Error::InvalidInput("the open note was never saved".to_string()))?;
            let shown = if session.loaded {
                session.note.clone()
            } else {
                Note::placeholder(&path)
            };
            (path, shown)
        };
        self.load(&path, shown).await
    }

    async fn load(&self, path: &str, shown: Note) -> Result<Note> {
        let id = self.next_sequence();
        {
            let mut state = self.state.lock().await;
            state.session = Some(NoteSession::loading(id, shown, parent_folder(path)));
            state.is_loading = true;
        }
        tracing::debug!(path, session = id, "Loading note");

        let result = self
            .executor
            .execute("download", || self.store.download(path))
            .await;

        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let Some(session) = state.session.as_mut().filter(|session| session.id == id) else {
            tracing::debug!(path, session = id, "Discarding superseded note load");
            return Err(Error::Superseded(format!("load of {path}")));
        };

        match result {
            Ok(download) => {
                session.loaded_from(Note::from_entry(download.entry, download.content));
                if let Some(shared) = state.shared_text.take() {
                    let content = append_shared_text(&session.rendered().content, &shared);
                    session.edit(NotePatch::content(content));
                }
                let rendered = session.rendered();
                state.is_loading = false;
                tracing::debug!(path, rev = ?rendered.rev, "Loaded note");
                Ok(rendered)
            }
            Err(error) => {
                session.editor = EditorState::Failed(error.to_string());
                state.is_loading = false;
                drop(guard);
                self.frontend.notify(Notice::LoadFailed {
                    message: error.to_string(),
                });
                Err(error.into())
            }
        }
    }

    /// Merge `patch` into the open note's pending edits.
    pub async fn update_note(&self, patch: NotePatch) -> Result<()> {
        let mut state = self.state.lock().await;
        let session = state.session.as_mut().ok_or(Error::NoActiveNote)?;
        if !session.is_editable() {
            return Err(Error::InvalidInput("the note is still loading".to_string()));
        }
        session.edit(patch);
        Ok(())
    }

    /// Write pending edits to the store.
    ///
    /// Returns the saved note, or `None` when there was nothing to save. A
    /// changed title renames the file first. On failure the edits go back
    /// into the buffer and the editor is marked failed; calling again
    /// retries.
    pub async fn save_note(&self) -> Result<Option<Note>> {
        let _gate = self.save_gate.lock().await;

        let (id, folder, pending) = {
            let mut state = self.state.lock().await;
            let Some(session) = state.session.as_mut() else {
                return Ok(None);
            };
            let Some(pending) = session.begin_save() else {
                return Ok(None);
            };
            (session.id, session.folder.clone(), pending)
        };

        match self.write(id, &folder, &pending).await {
            Ok((saved, refresh)) => {
                {
                    let mut state = self.state.lock().await;
                    if let Some(session) = state.session_mut(id) {
                        session.finish_save(saved.clone());
                    }
                }
                tracing::info!(
                    path = saved.path_display.as_deref().unwrap_or_default(),
                    rev = ?saved.rev,
                    "Saved note"
                );
                if refresh {
                    let path = self.current_path().await;
                    self.refresh_after_change(&path).await;
                }
                Ok(Some(saved))
            }
            Err(error) => {
                {
                    let mut state = self.state.lock().await;
                    if let Some(session) = state.session_mut(id) {
                        session.fail_save(pending, error.to_string());
                    }
                }
                tracing::error!(folder = %folder, "Saving note failed: {}", error);
                self.frontend.notify(Notice::SaveFailed {
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Rename if needed, then upload. Returns the new canonical note and
    /// whether the folder listing changed.
    async fn write(&self, id: u64, folder: &str, pending: &PendingEdit) -> Result<(Note, bool)> {
        let canonical = &pending.note;
        let rendered = pending.rendered();
        let mut rev = canonical.rev.clone();
        let mut listing_changed = canonical.is_new();

        let target = match canonical.path_display.as_deref() {
            Some(from) if pending.is_rename() => {
                let to = note_path(folder, &rendered.title);
                let moved = self
                    .executor
                    .execute("move", || self.store.move_entry(from, &to))
                    .await?;
                tracing::info!(from, to = %moved.path_display, "Renamed note");

                let mut state = self.state.lock().await;
                if let Some(session) = state.session_mut(id) {
                    session.moved_to(&moved);
                }
                drop(state);

                listing_changed = true;
                rev = moved.rev.or(rev);
                moved.path_display
            }
            Some(path) => path.to_string(),
            None => note_path(folder, &rendered.title),
        };

        let mode = WriteMode::for_revision(rev.as_deref());
        let entry = self
            .executor
            .execute("upload", || {
                self.store.upload(&target, &mode, &rendered.content)
            })
            .await?;

        Ok((Note::from_entry(entry, rendered.content), listing_changed))
    }

    /// Navigate away from the open note: save it, then end the session.
    ///
    /// The session is kept when the save fails.
    pub async fn close_note(&self) -> Result<()> {
        loop {
            self.save_note().await?;
            let mut state = self.state.lock().await;
            let Some(session) = state.session.as_ref() else {
                return Ok(());
            };
            if !session.has_edits() {
                state.session = None;
                state.is_loading = false;
                return Ok(());
            }
        }
    }

    /// Delete `note` from the store and refresh the folder on screen.
    ///
    /// A note that was never saved is only dropped locally, and only when it
    /// is the draft currently open.
    pub async fn delete_note(&self, note: &Note) -> Result<()> {
        let Some(path) = note.path_display.as_deref() else {
            let mut state = self.state.lock().await;
            if state
                .session
                .as_ref()
                .is_some_and(|session| session.note.is_new() && session.rendered() == *note)
            {
                state.session = None;
            }
            return Ok(());
        };

        self.executor
            .execute("delete", || self.store.delete(path))
            .await?;
        tracing::info!(path, "Deleted note");

        let folder = {
            let mut state = self.state.lock().await;
            let showing_deleted = state.session.as_ref().is_some_and(|session| {
                session
                    .note
                    .path_display
                    .as_deref()
                    .is_some_and(|open| open.eq_ignore_ascii_case(path))
            });
            if showing_deleted {
                state.session = None;
                state.is_loading = false;
            }
            state.items.retain(|entry| !entry.path_display.eq_ignore_ascii_case(path));
            state.path.clone()
        };
        self.refresh_after_change(&folder).await;
        Ok(())
    }

    /// Hand `note` to the platform share sheet.
    pub fn share_note(&self, note: &Note) {
        self.frontend.share(note);
    }

    /// Share the open note as currently rendered.
    pub async fn share_open_note(&self) -> Result<()> {
        let note = self.current_note().await.ok_or(Error::NoActiveNote)?;
        self.share_note(&note);
        Ok(())
    }

    /// Text shared into the app from elsewhere.
    ///
    /// Appended to the open note right away when it is loaded; otherwise held
    /// for the next note that is created or opened.
    pub async fn receive_shared_text(&self, text: &str) {
        if text.trim().is_empty() {
            return;
        }

        let mut state = self.state.lock().await;
        if let Some(session) = state.session.as_mut().filter(|session| session.is_editable()) {
            let content = append_shared_text(&session.rendered().content, text);
            session.edit(NotePatch::content(content));
            return;
        }

        let held = match state.shared_text.take() {
            Some(held) => append_shared_text(&held, text),
            None => text.to_string(),
        };
        state.shared_text = Some(held);
    }

    /// Foreground/background signal from the host platform.
    pub async fn app_state_changed(&self, activity: AppActivity) -> Result<()> {
        match activity {
            AppActivity::Background => self.save_note().await.map(|_| ()),
            AppActivity::Active => {
                let reload = {
                    let state = self.state.lock().await;
                    state.session.as_ref().is_some_and(|session| {
                        session.loaded
                            && !session.has_edits()
                            && session.editor == EditorState::Clean
                            && session.note.path_display.is_some()
                    })
                };
                if reload {
                    self.reload_note().await.map(|_| ())
                } else {
                    self.on_refresh().await.map(|_| ())
                }
            }
        }
    }

    // Search

    /// Search box changed.
    ///
    /// Bursts collapse into one remote search with the last text. Returns the
    /// results when they were applied to the displayed items, `None` when the
    /// call was superseded or the query was cleared.
    pub async fn on_search_change(&self, text: &str) -> Result<Option<Vec<Entry>>> {
        let ticket = self.search.ticket();
        let query = text.trim().to_string();

        if query.is_empty() {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            state.search_query = None;
            if let Some(cached) = state.cache.get(&state.path) {
                state.items = cached.to_vec();
            }
            return Ok(None);
        }

        self.state.lock().await.search_query = Some(query.clone());
        if !self.search.settle(ticket).await {
            return Ok(None);
        }

        let path = self.current_path().await;
        tracing::debug!(query = %query, path = %path, "Searching");
        let result = self
            .store
            .search(&query, &path, self.search_max_results)
            .await;

        if !self.search.is_current(ticket) {
            tracing::debug!(query = %query, "Discarding superseded search results");
            return Ok(None);
        }

        match result {
            Ok(entries) => {
                self.state.lock().await.items.clone_from(&entries);
                Ok(Some(entries))
            }
            Err(error) => {
                tracing::warn!(query = %query, "Search failed: {}", error);
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests;
