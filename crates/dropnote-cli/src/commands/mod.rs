pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod list;
pub mod mkdir;
pub mod new;
pub mod rename;
pub mod search;
pub mod show;

use std::io::Write;

use dropnote_core::{RemoteStore, Workspace};

use crate::cli::Commands;
use crate::error::CliError;

pub async fn dispatch<S: RemoteStore, W: Write>(
    workspace: &Workspace<S>,
    command: Commands,
    as_json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Commands::List { path } => list::run_list(workspace, path.as_deref(), as_json, out).await,
        Commands::Show { path } => show::run_show(workspace, &path, as_json, out).await,
        Commands::New { title, content } => {
            new::run_new(workspace, title.as_deref(), &content, as_json, out).await
        }
        Commands::Edit { path } => edit::run_edit(workspace, &path, as_json, out).await,
        Commands::Rename { path, title } => {
            rename::run_rename(workspace, &path, &title, as_json, out).await
        }
        Commands::Delete { path } => delete::run_delete(workspace, &path, out).await,
        Commands::Mkdir { path } => mkdir::run_mkdir(workspace, &path, out).await,
        Commands::Search { query, .. } => search::run_search(workspace, &query, as_json, out).await,
        Commands::Completions { shell, output } => {
            completions::run_completions(shell, output.as_deref(), out)
        }
    }
}
