//! Last known listing per folder.

use std::collections::HashMap;

use crate::models::Entry;

/// Path-keyed cache of folder listings.
///
/// Each `put` replaces the listing for that path wholesale. Nothing expires;
/// the cache grows with the number of folders visited.
#[derive(Debug, Clone, Default)]
pub struct FolderCache {
    listings: HashMap<String, Vec<Entry>>,
}

impl FolderCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&[Entry]> {
        self.listings.get(path).map(Vec::as_slice)
    }

    pub fn put(&mut self, path: impl Into<String>, entries: Vec<Entry>) {
        self.listings.insert(path.into(), entries);
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
