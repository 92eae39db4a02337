use std::io::Write;

use dropnote_core::{RemoteStore, Workspace};

use super::common::{resolve_folder_path, write_entries};
use crate::error::CliError;

pub async fn run_list<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    path: Option<&str>,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let root = workspace.current_path().await;
    let folder = path.map_or_else(|| root.clone(), |raw| resolve_folder_path(&root, raw));
    let entries = workspace.navigate_to(&folder).await?;
    write_entries(&entries, as_json, out)
}
