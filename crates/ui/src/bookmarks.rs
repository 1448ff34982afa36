//! Bookmarks.

use crate::storage;
use common::ShellResult;
use std::path::PathBuf;

/// Saved page URLs.
///
/// Saving the same page twice stores it twice.
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<String>,
}

impl BookmarkStore {
    /// Load bookmarks saved by earlier sessions.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = storage::load_list(&path).unwrap_or_else(|e| {
            tracing::warn!("Could not read bookmarks from {}: {}", path.display(), e);
            Vec::new()
        });

        Self { path, bookmarks }
    }

    /// Append a bookmark and persist the full list.
    pub fn add(&mut self, url: &str) -> ShellResult<()> {
        self.bookmarks.push(url.to_string());
        storage::save_list(&self.path, &self.bookmarks)
    }

    pub fn entries(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn contains(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b == url)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
