use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dropnote")]
#[command(about = "Plain-text notes kept in your Dropbox")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a JSON config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a folder (the configured root when omitted)
    #[command(alias = "ls")]
    List {
        /// Folder path, absolute or relative to the root
        path: Option<String>,
    },
    /// Print a note
    #[command(alias = "cat")]
    Show {
        /// Note path, absolute or relative to the root
        path: String,
    },
    /// Create a new note
    #[command(alias = "add")]
    New {
        /// Note title; `.md` is appended when it has no extension
        #[arg(short, long)]
        title: Option<String>,
        /// Note content (stdin or $EDITOR when omitted)
        content: Vec<String>,
    },
    /// Edit a note in $VISUAL or $EDITOR
    Edit {
        /// Note path, absolute or relative to the root
        path: String,
    },
    /// Rename a note
    #[command(alias = "mv")]
    Rename {
        /// Note path, absolute or relative to the root
        path: String,
        /// New title
        title: String,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note path, absolute or relative to the root
        path: String,
    },
    /// Create a folder
    Mkdir {
        /// Folder path relative to the root
        path: String,
    },
    /// Search note names and content
    Search {
        /// Search query
        query: String,
        /// Maximum number of matches
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
