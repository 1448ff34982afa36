//! Browsing history.

use crate::storage;
use common::ShellResult;
use std::path::{Path, PathBuf};

/// Visited addresses in the order they were entered.
///
/// Entries are kept verbatim: no deduplication and no size cap. Every
/// append rewrites the whole file.
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Load history from `path`.
    ///
    /// A missing file starts an empty history. An unreadable one is logged
    /// and also starts empty; it is overwritten on the next append.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match storage::load_list(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Could not read history from {}: {}", path.display(), e);
                Vec::new()
            }
        };

        Self { path, entries }
    }

    /// Record a visit and persist.
    pub fn append(&mut self, url: &str) -> ShellResult<()> {
        self.entries.push(url.to_string());
        storage::save_list(&self.path, &self.entries)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
