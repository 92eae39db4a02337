use std::io::Write;

use dropnote_core::{RemoteStore, Workspace};

use super::common::{normalize_search_query, write_entries};
use crate::error::CliError;

/// One-shot search; the workspace is built with a zero debounce window.
pub async fn run_search<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    query: &str,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let query = normalize_search_query(query)?;
    let matches = workspace
        .on_search_change(&query)
        .await?
        .unwrap_or_default();
    write_entries(&matches, as_json, out)
}
