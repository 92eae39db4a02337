use std::io::Write;

use dropnote_core::paths::ensure_extension;
use dropnote_core::{NotePatch, RemoteStore, Workspace};

use super::common::{normalize_title, resolve_note_path, write_saved_note};
use crate::error::CliError;

pub async fn run_rename<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: &str,
    title: &str,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let path = resolve_note_path(&workspace.current_path().await, path)?;
    let title = normalize_title(title)?;

    let note = workspace.edit_note(&path).await?;
    if ensure_extension(&title) == note.title {
        workspace.close_note().await?;
        return write_saved_note(&note, as_json, out);
    }

    workspace.update_note(NotePatch::title(title)).await?;
    let saved = workspace.save_note().await?;
    workspace.close_note().await?;
    write_saved_note(saved.as_ref().unwrap_or(&note), as_json, out)
}
