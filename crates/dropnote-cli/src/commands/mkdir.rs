use std::io::Write;

use dropnote_core::paths::{last_segment, parent_folder};
use dropnote_core::{RemoteStore, Workspace};

use super::common::resolve_note_path;
use crate::error::CliError;

pub async fn run_mkdir<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: &str,
    out: &mut W,
) -> Result<(), CliError> {
    let path = resolve_note_path(&workspace.current_path().await, path)?;
    workspace.navigate_to(parent_folder(&path)).await?;
    let created = workspace.add_folder(last_segment(&path)).await?;
    writeln!(out, "{created}")?;
    Ok(())
}
