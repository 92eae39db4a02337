use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::time::sleep;

use super::*;
use crate::error::RemoteError;
use crate::frontend::RecordingFrontend;
use crate::remote::memory::{MemoryStore, StoreCall};

fn workspace(store: MemoryStore) -> (Workspace<MemoryStore>, Arc<RecordingFrontend>) {
    let frontend = Arc::new(RecordingFrontend::new());
    let workspace = Workspace::new(store, frontend.clone(), WorkspaceOptions::default());
    (workspace, frontend)
}

fn writes(store: &MemoryStore) -> Vec<StoreCall> {
    store
        .calls()
        .into_iter()
        .filter(|call| matches!(call, StoreCall::Move { .. } | StoreCall::Upload { .. }))
        .collect()
}

fn titles(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.title.as_str()).collect()
}

fn unavailable(operation: &str) -> RemoteError {
    RemoteError::new(operation, Some(503), "service unavailable")
}

#[tokio::test(start_paused = true)]
async fn navigate_paints_cached_listing_while_refreshing() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.insert_folder("/Work");
    let (workspace, _) = workspace(store);

    workspace.navigate_to("").await.unwrap();
    workspace.navigate_to("/Work").await.unwrap();
    assert!(workspace.snapshot().await.items.is_empty());

    workspace.store().insert_file("/b.md", "B");
    workspace
        .store()
        .delay_next("list_folder", Duration::from_secs(1));

    let (fresh, painted) = tokio::join!(workspace.navigate_to(""), async {
        sleep(Duration::from_millis(10)).await;
        workspace.snapshot().await.items
    });

    assert_eq!(titles(&painted), vec!["a.md", "Work"]);
    assert_eq!(titles(&fresh.unwrap()), vec!["a.md", "b.md", "Work"]);
    assert_eq!(
        titles(&workspace.snapshot().await.items),
        vec!["a.md", "b.md", "Work"]
    );
}

#[tokio::test(start_paused = true)]
async fn listing_for_a_folder_left_behind_does_not_replace_items() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.insert_file("/Work/w.md", "W");
    store.delay_next("list_folder", Duration::from_secs(2));
    let (workspace, _) = workspace(store);

    let (work, root) = tokio::join!(workspace.navigate_to("/Work"), async {
        sleep(Duration::from_millis(100)).await;
        workspace.navigate_to("").await
    });

    assert_eq!(titles(&work.unwrap()), vec!["w.md"]);
    assert_eq!(titles(&root.unwrap()), vec!["a.md", "Work"]);
    let view = workspace.snapshot().await;
    assert_eq!(view.path, "");
    assert_eq!(titles(&view.items), vec!["a.md", "Work"]);
}

#[tokio::test(start_paused = true)]
async fn older_listing_of_the_same_folder_is_discarded() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.delay_next("list_folder", Duration::from_secs(2));
    let (workspace, _) = workspace(store);

    let (slow, fast) = tokio::join!(workspace.list_folder(""), async {
        sleep(Duration::from_millis(100)).await;
        let fast = workspace.list_folder("").await;
        workspace.store().insert_file("/late.md", "L");
        fast
    });

    assert_eq!(titles(&slow.unwrap()), vec!["a.md", "late.md"]);
    assert_eq!(titles(&fast.unwrap()), vec!["a.md"]);
    assert_eq!(titles(&workspace.snapshot().await.items), vec!["a.md"]);
}

#[tokio::test(start_paused = true)]
async fn failed_listing_leaves_items_untouched() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, frontend) = workspace(store);
    workspace.navigate_to("").await.unwrap();

    workspace
        .store()
        .fail_next("list_folder", 6, &unavailable("list_folder"));
    assert!(workspace.on_refresh().await.is_err());

    assert_eq!(titles(&workspace.snapshot().await.items), vec!["a.md"]);
    assert_eq!(frontend.notices().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn slow_listing_shows_refreshing() {
    let store = MemoryStore::new();
    store.delay_next("list_folder", Duration::from_secs(1));
    let (workspace, _) = workspace(store);

    let (_, during) = tokio::join!(workspace.on_refresh(), async {
        sleep(Duration::from_millis(700)).await;
        workspace.snapshot().await.is_refreshing
    });

    assert!(during);
    assert!(!workspace.snapshot().await.is_refreshing);
}

#[tokio::test(start_paused = true)]
async fn opening_a_note_shows_placeholder_then_content() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "hello");
    store.delay_next("download", Duration::from_secs(1));
    let (workspace, _) = workspace(store);

    let (loaded, during) = tokio::join!(workspace.edit_note("/a.md"), async {
        sleep(Duration::from_millis(10)).await;
        workspace.snapshot().await
    });

    let during_note = during.note.unwrap();
    assert_eq!(during_note.title, "a.md");
    assert_eq!(during_note.content, crate::models::LOADING_PLACEHOLDER);
    assert!(during.is_loading);
    assert_eq!(during.editor, Some(EditorState::Loading));

    assert_eq!(loaded.unwrap().content, "hello");
    let view = workspace.snapshot().await;
    assert!(!view.is_loading);
    assert_eq!(view.editor, Some(EditorState::Clean));
}

#[tokio::test(start_paused = true)]
async fn edits_are_rejected_while_loading() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "hello");
    store.delay_next("download", Duration::from_secs(1));
    let (workspace, _) = workspace(store);

    let (_, rejected) = tokio::join!(workspace.edit_note("/a.md"), async {
        sleep(Duration::from_millis(10)).await;
        workspace.update_note(NotePatch::content("typed early")).await
    });

    assert!(matches!(rejected, Err(Error::InvalidInput(_))));
    assert_eq!(workspace.current_note().await.unwrap().content, "hello");
}

#[tokio::test(start_paused = true)]
async fn superseded_load_is_discarded() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.insert_file("/b.md", "B");
    store.delay_next("download", Duration::from_secs(2));
    let (workspace, _) = workspace(store);

    let (first, second) = tokio::join!(workspace.edit_note("/a.md"), async {
        sleep(Duration::from_millis(100)).await;
        workspace.edit_note("/b.md").await
    });

    assert!(matches!(first, Err(Error::Superseded(_))));
    assert_eq!(second.unwrap().content, "B");
    assert_eq!(workspace.current_note().await.unwrap().title, "b.md");
}

#[tokio::test(start_paused = true)]
async fn failed_load_marks_editor_failed() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.fail_next("download", 6, &unavailable("download"));
    let (workspace, frontend) = workspace(store);

    assert!(workspace.edit_note("/a.md").await.is_err());

    let view = workspace.snapshot().await;
    assert!(matches!(view.editor, Some(EditorState::Failed(_))));
    assert!(!view.is_loading);
    assert!(matches!(
        frontend.notices().last(),
        Some(Notice::LoadFailed { .. })
    ));

    let reloaded = workspace.reload_note().await.unwrap();
    assert_eq!(reloaded.content, "A");
}

#[tokio::test(start_paused = true)]
async fn save_with_empty_buffer_issues_no_calls() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();

    assert_eq!(workspace.save_note().await.unwrap(), None);
    assert!(writes(workspace.store()).is_empty());
}

#[tokio::test(start_paused = true)]
async fn edits_during_an_in_flight_save_go_into_the_next_save() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("X"))
        .await
        .unwrap();

    workspace
        .store()
        .delay_next("upload", Duration::from_secs(1));
    let (saved, ()) = tokio::join!(workspace.save_note(), async {
        sleep(Duration::from_millis(100)).await;
        workspace
            .update_note(NotePatch::content("Y"))
            .await
            .unwrap();
    });

    let saved = saved.unwrap().unwrap();
    assert_eq!(saved.content, "X");
    assert_eq!(saved.rev.as_deref(), Some("r2"));
    let view = workspace.snapshot().await;
    assert_eq!(view.editor, Some(EditorState::Dirty));
    assert_eq!(view.note.unwrap().content, "Y");

    workspace.save_note().await.unwrap();
    assert_eq!(
        writes(workspace.store()),
        vec![
            StoreCall::Upload {
                path: "/a.md".to_string(),
                mode: WriteMode::Update("r1".to_string()),
                content: "X".to_string(),
            },
            StoreCall::Upload {
                path: "/a.md".to_string(),
                mode: WriteMode::Update("r2".to_string()),
                content: "Y".to_string(),
            },
        ]
    );
    assert_eq!(workspace.store().content("/a.md").as_deref(), Some("Y"));
}

#[tokio::test(start_paused = true)]
async fn failed_save_restores_edits_and_can_be_retried() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, frontend) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("X"))
        .await
        .unwrap();

    workspace
        .store()
        .fail_next("upload", 6, &unavailable("upload"));
    assert!(workspace.save_note().await.is_err());

    let view = workspace.snapshot().await;
    assert!(matches!(view.editor, Some(EditorState::Failed(_))));
    assert_eq!(view.note.unwrap().content, "X");
    assert_eq!(workspace.store().content("/a.md").as_deref(), Some("A"));
    assert!(matches!(
        frontend.notices().last(),
        Some(Notice::SaveFailed { .. })
    ));

    let saved = workspace.save_note().await.unwrap().unwrap();
    assert_eq!(saved.content, "X");
    assert_eq!(
        workspace.snapshot().await.editor,
        Some(EditorState::Clean)
    );
}

#[tokio::test(start_paused = true)]
async fn revision_conflict_surfaces_as_failure() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();

    let rev = workspace.store().revision("/a.md");
    workspace
        .store()
        .upload("/a.md", &WriteMode::for_revision(rev.as_deref()), "elsewhere")
        .await
        .unwrap();

    workspace
        .update_note(NotePatch::content("mine"))
        .await
        .unwrap();
    let error = workspace.save_note().await.unwrap_err();
    assert!(matches!(error, Error::Remote(ref remote) if remote.is_conflict()));
    assert_eq!(
        workspace.store().content("/a.md").as_deref(),
        Some("elsewhere")
    );
    assert_eq!(workspace.current_note().await.unwrap().content, "mine");
}

#[tokio::test(start_paused = true)]
async fn rename_moves_before_uploading() {
    let store = MemoryStore::new();
    store.insert_file("/Work/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("/Work").await.unwrap();
    workspace.edit_note("/Work/a.md").await.unwrap();

    workspace
        .update_note(NotePatch::title("b"))
        .await
        .unwrap();
    let saved = workspace.save_note().await.unwrap().unwrap();

    assert_eq!(saved.path_display.as_deref(), Some("/Work/b.md"));
    assert_eq!(saved.title, "b.md");
    assert_eq!(
        writes(workspace.store()),
        vec![
            StoreCall::Move {
                from: "/Work/a.md".to_string(),
                to: "/Work/b.md".to_string(),
            },
            StoreCall::Upload {
                path: "/Work/b.md".to_string(),
                mode: WriteMode::Update("r1".to_string()),
                content: "A".to_string(),
            },
        ]
    );
    assert_eq!(
        titles(&workspace.snapshot().await.items),
        vec!["b.md"]
    );
}

#[tokio::test(start_paused = true)]
async fn retrying_a_failed_rename_does_not_move_again() {
    let store = MemoryStore::new();
    store.insert_file("/Work/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("/Work").await.unwrap();
    workspace.edit_note("/Work/a.md").await.unwrap();

    workspace
        .update_note(NotePatch::title("b").with_content("X"))
        .await
        .unwrap();
    workspace
        .store()
        .fail_next("upload", 6, &unavailable("upload"));
    assert!(workspace.save_note().await.is_err());

    let saved = workspace.save_note().await.unwrap().unwrap();

    assert_eq!(saved.path_display.as_deref(), Some("/Work/b.md"));
    assert_eq!(workspace.store().calls_of("move").len(), 1);
    assert_eq!(workspace.store().content("/Work/b.md").as_deref(), Some("X"));
    assert!(!workspace.store().exists("/Work/b (1).md"));
}

#[tokio::test(start_paused = true)]
async fn resending_the_saved_title_is_not_a_rename() {
    let store = MemoryStore::new();
    store.insert_file("/Work/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/Work/a.md").await.unwrap();

    workspace
        .update_note(NotePatch::title("b"))
        .await
        .unwrap();
    workspace.save_note().await.unwrap();

    workspace
        .update_note(NotePatch::title("b").with_content("Y"))
        .await
        .unwrap();
    let saved = workspace.save_note().await.unwrap().unwrap();

    assert_eq!(saved.path_display.as_deref(), Some("/Work/b.md"));
    assert_eq!(workspace.store().calls_of("move").len(), 1);
    assert_eq!(
        workspace.store().calls_of("upload").last(),
        Some(&StoreCall::Upload {
            path: "/Work/b.md".to_string(),
            mode: WriteMode::Update("r2".to_string()),
            content: "Y".to_string(),
        })
    );
}

#[tokio::test(start_paused = true)]
async fn new_note_is_added_under_its_title() {
    let store = MemoryStore::new();
    store.insert_folder("/Work");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("/Work").await.unwrap();

    workspace.add_note().await.unwrap();
    workspace
        .update_note(NotePatch::title("Groceries").with_content("milk"))
        .await
        .unwrap();
    let saved = workspace.save_note().await.unwrap().unwrap();

    assert_eq!(saved.path_display.as_deref(), Some("/Work/Groceries.md"));
    assert_eq!(
        writes(workspace.store()),
        vec![StoreCall::Upload {
            path: "/Work/Groceries.md".to_string(),
            mode: WriteMode::Add,
            content: "milk".to_string(),
        }]
    );
    assert_eq!(
        titles(&workspace.snapshot().await.items),
        vec!["Groceries.md"]
    );
}

#[tokio::test(start_paused = true)]
async fn untitled_note_gets_default_name() {
    let (workspace, _) = workspace(MemoryStore::new());
    workspace.add_note().await.unwrap();
    workspace
        .update_note(NotePatch::content("scratch"))
        .await
        .unwrap();

    let saved = workspace.save_note().await.unwrap().unwrap();
    assert_eq!(saved.path_display.as_deref(), Some("/Untitled.md"));
    assert_eq!(saved.rev.as_deref(), Some("r1"));
}

#[tokio::test(start_paused = true)]
async fn opening_another_note_saves_the_dirty_one() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.insert_file("/b.md", "B");
    let (workspace, _) = workspace(store);

    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("A2"))
        .await
        .unwrap();
    workspace.edit_note("/b.md").await.unwrap();

    assert_eq!(workspace.store().content("/a.md").as_deref(), Some("A2"));
    assert_eq!(workspace.current_note().await.unwrap().title, "b.md");
}

#[tokio::test(start_paused = true)]
async fn close_keeps_session_when_save_fails() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("X"))
        .await
        .unwrap();

    workspace
        .store()
        .fail_next("upload", 6, &unavailable("upload"));
    assert!(workspace.close_note().await.is_err());
    assert_eq!(workspace.current_note().await.unwrap().content, "X");

    workspace.close_note().await.unwrap();
    assert!(workspace.current_note().await.is_none());
    assert_eq!(workspace.store().content("/a.md").as_deref(), Some("X"));
}

#[tokio::test(start_paused = true)]
async fn shared_text_is_held_for_the_next_new_note() {
    let (workspace, _) = workspace(MemoryStore::new());

    workspace.receive_shared_text("https://example.com").await;
    let note = workspace.add_note().await.unwrap();

    assert_eq!(note.content, "https://example.com");
    assert_eq!(
        workspace.snapshot().await.editor,
        Some(EditorState::Dirty)
    );
}

#[tokio::test(start_paused = true)]
async fn shared_text_is_appended_to_a_loaded_note() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "hello\n");
    let (workspace, _) = workspace(store);

    workspace.receive_shared_text("first").await;
    let note = workspace.edit_note("/a.md").await.unwrap();
    assert_eq!(note.content, "hello\nfirst");

    workspace.receive_shared_text("second").await;
    let view = workspace.snapshot().await;
    assert_eq!(view.note.unwrap().content, "hello\nfirst\nsecond");
    assert_eq!(view.editor, Some(EditorState::Dirty));

    workspace.save_note().await.unwrap();
    assert_eq!(
        workspace.store().content("/a.md").as_deref(),
        Some("hello\nfirst\nsecond")
    );
}

#[tokio::test(start_paused = true)]
async fn deleting_the_open_note_ends_the_session() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    store.insert_file("/b.md", "B");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("").await.unwrap();
    let note = workspace.edit_note("/a.md").await.unwrap();

    workspace.delete_note(&note).await.unwrap();

    assert!(!workspace.store().exists("/a.md"));
    let view = workspace.snapshot().await;
    assert!(view.note.is_none());
    assert_eq!(titles(&view.items), vec!["b.md"]);
}

#[tokio::test(start_paused = true)]
async fn deleting_an_unsaved_note_makes_no_calls() {
    let (workspace, _) = workspace(MemoryStore::new());
    let draft = workspace.add_note().await.unwrap();

    workspace.delete_note(&draft).await.unwrap();

    assert!(workspace.current_note().await.is_none());
    assert!(workspace.store().calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn deleting_some_other_unsaved_note_keeps_the_open_draft() {
    let (workspace, _) = workspace(MemoryStore::new());
    workspace.add_note().await.unwrap();
    workspace
        .update_note(NotePatch::content("keep me"))
        .await
        .unwrap();

    let stranger = Note {
        title: "other.md".to_string(),
        ..Note::draft()
    };
    workspace.delete_note(&stranger).await.unwrap();

    assert_eq!(
        workspace.current_note().await.map(|note| note.content),
        Some("keep me".to_string())
    );
    assert!(workspace.store().calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn add_folder_creates_and_refreshes() {
    let (workspace, _) = workspace(MemoryStore::new());

    let path = workspace.add_folder("Projects").await.unwrap();

    assert_eq!(path, "/Projects");
    assert!(workspace.store().exists("/Projects"));
    assert_eq!(
        titles(&workspace.snapshot().await.items),
        vec!["Projects"]
    );
    assert!(workspace.add_folder("  ").await.is_err());
}

#[tokio::test(start_paused = true)]
async fn background_saves_and_active_reloads_clean_note() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("X"))
        .await
        .unwrap();

    workspace
        .app_state_changed(AppActivity::Background)
        .await
        .unwrap();
    assert_eq!(workspace.store().content("/a.md").as_deref(), Some("X"));

    workspace
        .app_state_changed(AppActivity::Active)
        .await
        .unwrap();
    assert_eq!(workspace.store().calls_of("download").len(), 2);
    assert!(workspace.store().calls_of("list_folder").is_empty());
}

#[tokio::test(start_paused = true)]
async fn active_with_dirty_note_refreshes_folder_instead() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, _) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("X"))
        .await
        .unwrap();

    workspace
        .app_state_changed(AppActivity::Active)
        .await
        .unwrap();

    assert_eq!(workspace.store().calls_of("download").len(), 1);
    assert_eq!(workspace.store().calls_of("list_folder").len(), 1);
    assert_eq!(workspace.current_note().await.unwrap().content, "X");
}

#[tokio::test(start_paused = true)]
async fn share_hands_the_rendered_note_to_the_frontend() {
    let store = MemoryStore::new();
    store.insert_file("/a.md", "A");
    let (workspace, frontend) = workspace(store);
    workspace.edit_note("/a.md").await.unwrap();
    workspace
        .update_note(NotePatch::content("shared"))
        .await
        .unwrap();

    workspace.share_open_note().await.unwrap();

    assert_eq!(frontend.shared()[0].content, "shared");
}

#[tokio::test(start_paused = true)]
async fn search_burst_collapses_into_one_call() {
    let store = MemoryStore::new();
    store.insert_file("/groceries.md", "milk");
    store.insert_file("/todo.md", "call mom");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("").await.unwrap();

    let (first, second, third) = tokio::join!(
        workspace.on_search_change("g"),
        async {
            sleep(Duration::from_millis(100)).await;
            workspace.on_search_change("gro").await
        },
        async {
            sleep(Duration::from_millis(200)).await;
            workspace.on_search_change("groc").await
        }
    );

    assert_eq!(first.unwrap(), None);
    assert_eq!(second.unwrap(), None);
    assert_eq!(titles(&third.unwrap().unwrap()), vec!["groceries.md"]);
    assert_eq!(
        workspace.store().calls_of("search"),
        vec![StoreCall::Search {
            query: "groc".to_string(),
            path: String::new(),
        }]
    );

    let view = workspace.snapshot().await;
    assert_eq!(titles(&view.items), vec!["groceries.md"]);
    assert_eq!(view.search_query.as_deref(), Some("groc"));
}

#[tokio::test(start_paused = true)]
async fn clearing_search_restores_cached_listing_without_traffic() {
    let store = MemoryStore::new();
    store.insert_file("/groceries.md", "milk");
    store.insert_file("/todo.md", "call mom");
    let (workspace, _) = workspace(store);
    workspace.navigate_to("").await.unwrap();
    workspace.on_search_change("milk").await.unwrap();
    let calls_before = workspace.store().calls().len();

    assert_eq!(workspace.on_search_change("  ").await.unwrap(), None);

    assert_eq!(workspace.store().calls().len(), calls_before);
    let view = workspace.snapshot().await;
    assert_eq!(titles(&view.items), vec!["groceries.md", "todo.md"]);
    assert_eq!(view.search_query, None);
}

#[tokio::test(start_paused = true)]
async fn superseded_in_flight_search_is_discarded() {
    let store = MemoryStore::new();
    store.insert_file("/groceries.md", "milk");
    store.insert_file("/todo.md", "call mom");
    store.delay_next("search", Duration::from_secs(1));
    let (workspace, _) = workspace(store);
    workspace.navigate_to("").await.unwrap();

    let (searched, _) = tokio::join!(workspace.on_search_change("milk"), async {
        sleep(Duration::from_millis(500)).await;
        workspace.on_search_change("").await
    });

    assert_eq!(searched.unwrap(), None);
    assert_eq!(
        titles(&workspace.snapshot().await.items),
        vec!["groceries.md", "todo.md"]
    );
}
