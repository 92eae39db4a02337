use std::io::Write;

use dropnote_core::{Note, NotePatch, RemoteStore, Workspace};

use super::common::{capture_editor_input_with_initial, resolve_note_path, write_saved_note};
use crate::error::CliError;

pub async fn run_edit<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: &str,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let path = resolve_note_path(&workspace.current_path().await, path)?;
    let note = workspace.edit_note(&path).await?;
    let edited = capture_editor_input_with_initial(&note.content)?;
    apply_edit(workspace, &note, edited, as_json, out).await
}

/// Save editor output over the open note; unchanged text writes nothing.
pub async fn apply_edit<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    note: &Note,
    edited: Option<String>,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let Some(edited) = edited else {
        workspace.close_note().await?;
        return Err(CliError::EmptyEditedContent);
    };

    if edited == note.content.trim() {
        workspace.close_note().await?;
        write_saved_note(note, as_json, out)?;
        return Ok(());
    }

    workspace.update_note(NotePatch::content(edited)).await?;
    let saved = workspace.save_note().await?;
    workspace.close_note().await?;
    write_saved_note(saved.as_ref().unwrap_or(note), as_json, out)
}
