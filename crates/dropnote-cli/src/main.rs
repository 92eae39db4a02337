//! Dropnote CLI - plain-text notes kept in your Dropbox

mod cli;
mod commands;
mod error;
mod terminal;


use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dropnote_core::{DropboxClient, Workspace, WorkspaceOptions};

use crate::cli::{Cli, Commands};
use crate::commands::common::load_config;
use crate::commands::completions::run_completions;
use crate::commands::dispatch;
use crate::error::CliError;
use crate::terminal::TerminalFrontend;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "dropnote=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref(), &mut stdout);
    }

    let config = load_config(cli.config)?;
    let mut options = WorkspaceOptions::from(&config);
    if let Commands::Search { limit, .. } = &cli.command {
        options.search_max_results = (*limit).max(1);
        options.search_debounce = Duration::ZERO;
    }

    let client = DropboxClient::from_config(&config)?;
    let workspace = Workspace::new(client, Arc::new(TerminalFrontend), options);
    dispatch(&workspace, cli.command, cli.json, &mut stdout).await
}
