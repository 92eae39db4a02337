use std::io::Write;

use dropnote_core::{RemoteStore, Workspace};

use super::common::resolve_note_path;
use crate::error::CliError;

pub async fn run_show<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: &str,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let path = resolve_note_path(&workspace.current_path().await, path)?;
    let note = workspace.edit_note(&path).await?;
    workspace.close_note().await?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
    } else {
        writeln!(out, "{}", note.content)?;
    }
    Ok(())
}
