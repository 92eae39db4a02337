use std::io::Write;

use dropnote_core::{Note, RemoteStore, Workspace};

use super::common::resolve_note_path;
use crate::error::CliError;

pub async fn run_delete<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: &str,
    out: &mut W,
) -> Result<(), CliError> {
    let path = resolve_note_path(&workspace.current_path().await, path)?;
    workspace.delete_note(&Note::placeholder(&path)).await?;
    writeln!(out, "Deleted {path}")?;
    Ok(())
}
