//! Store path helpers.
//!
//! Paths are `/`-separated and absolute; the root folder is `""`.

/// Title used when a new note is saved without one.
pub const DEFAULT_TITLE: &str = "Untitled.md";

/// Extension appended to titles that have none.
pub const NOTE_EXTENSION: &str = ".md";

/// Final segment of `path`.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Folder containing `path` (`""` for top-level entries).
pub fn parent_folder(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

/// `folder/name`, with the root folder written as `""`.
pub fn join_path(folder: &str, name: &str) -> String {
    let folder = folder.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    format!("{folder}/{name}")
}

/// Append `.md` unless the title already carries an extension.
pub fn ensure_extension(title: &str) -> String {
    match title.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < title.len() => title.to_string(),
        _ => format!("{}{NOTE_EXTENSION}", title.trim_end_matches('.')),
    }
}

/// Path a note titled `title` gets inside `folder`.
pub fn note_path(folder: &str, title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        join_path(folder, DEFAULT_TITLE)
    } else {
        join_path(folder, &ensure_extension(title))
    }
}

/// Canonical form of a folder path typed by a user: leading slash, no
/// trailing slash, `""` for the root.
pub fn normalize_folder(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
