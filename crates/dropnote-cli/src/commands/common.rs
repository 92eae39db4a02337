use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;
use dropnote_core::paths::join_path;
use dropnote_core::{ClientConfig, Entry, Note};
use serde::Serialize;

use crate::error::CliError;

/// Environment variable naming a config file.
pub const ENV_CONFIG_PATH: &str = "DROPNOTE_CONFIG";

/// Saved-note summary printed by `new`, `edit` and `rename` with `--json`.
#[derive(Debug, Serialize)]
pub struct SavedNoteItem {
    pub id: Option<String>,
    pub title: String,
    pub path: Option<String>,
    pub rev: Option<String>,
    pub preview: String,
}

impl From<&Note> for SavedNoteItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            title: note.title.clone(),
            path: note.path_display.clone(),
            rev: note.rev.clone(),
            preview: note.preview(80),
        }
    }
}

pub fn write_saved_note<W: Write>(note: &Note, as_json: bool, out: &mut W) -> Result<(), CliError> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&SavedNoteItem::from(note))?)?;
    } else {
        writeln!(out, "{}", note.path_display.as_deref().unwrap_or(&note.title))?;
    }
    Ok(())
}

pub fn write_entries<W: Write>(entries: &[Entry], as_json: bool, out: &mut W) -> Result<(), CliError> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        return Ok(());
    }

    let now_ms = Utc::now().timestamp_millis();
    for line in format_entry_lines(entries, now_ms) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn format_entry_lines(entries: &[Entry], now_ms: i64) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let name = if entry.is_folder {
                format!("{}/", entry.title)
            } else {
                entry.title.clone()
            };
            match entry.server_modified {
                Some(modified) => format!(
                    "{name:<40}  {}",
                    format_relative_time(modified.timestamp_millis(), now_ms)
                ),
                None => name,
            }
        })
        .collect()
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}

/// Absolute store path for `raw`, taken relative to `root` unless it starts
/// with `/`.
pub fn resolve_note_path(root: &str, raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CliError::EmptyNotePath);
    }
    if trimmed.starts_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(join_path(root, trimmed))
    }
}

/// Like [`resolve_note_path`], but an empty path or `/` means the store root.
pub fn resolve_folder_path(root: &str, raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        if raw.trim().starts_with('/') {
            String::new()
        } else {
            root.to_string()
        }
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        join_path(root, trimmed)
    }
}

pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input()? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn normalize_title(title: &str) -> Result<String, CliError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyTitle)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

pub fn capture_editor_input() -> Result<Option<String>, CliError> {
    capture_editor_input_with_initial("")
}

pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_content(&note_content))
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) => {
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let mut command = Command::new(program);
            command.args(parts).arg(file_path);

            let status = command.status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("dropnote-{}-{now}.md", std::process::id()))
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dropnote").join("config.json"))
}

/// Config file to read: `--config`, then `DROPNOTE_CONFIG`, then the default
/// location when a file exists there.
pub fn resolve_config_path(
    explicit: Option<PathBuf>,
    from_env: Option<PathBuf>,
    default: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(from_env)
        .or_else(|| default.filter(|path| path.is_file()))
}

pub fn load_config(explicit: Option<PathBuf>) -> Result<ClientConfig, CliError> {
    let path = resolve_config_path(
        explicit,
        env::var_os(ENV_CONFIG_PATH).map(PathBuf::from),
        default_config_path(),
    );

    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "Loading config file");
        let config = ClientConfig::load_from_path(&path)?
            .with_overrides(|key| env::var(key).ok())
            .validated()?;
        return Ok(config);
    }

    ClientConfig::from_env()?.ok_or_else(|| {
        let hint = default_config_path().map_or_else(
            || "a config file".to_string(),
            |path| path.display().to_string(),
        );
        CliError::NotConfigured(hint)
    })
}
