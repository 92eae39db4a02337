use std::io::Write;

use dropnote_core::{NotePatch, RemoteStore, Workspace};

use super::common::{normalize_content, resolve_note_content, write_saved_note};
use crate::error::CliError;

pub async fn run_new<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    title: Option<&str>,
    content_parts: &[String],
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;
    create_note(workspace, title, &content, as_json, out).await
}

/// Save `content` as a new note in the current folder.
pub async fn create_note<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    title: Option<&str>,
    content: &str,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let content = normalize_content(content).ok_or(CliError::EmptyContent)?;

    workspace.add_note().await?;
    let mut patch = NotePatch::content(content);
    patch.title = title
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(ToString::to_string);
    workspace.update_note(patch).await?;

    let saved = workspace.save_note().await?.ok_or(CliError::EmptyContent)?;
    workspace.close_note().await?;
    write_saved_note(&saved, as_json, out)
}
