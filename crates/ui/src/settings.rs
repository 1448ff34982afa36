//! Shell settings.

use crate::homepage::DEFAULT_HOMEPAGE;
use crate::navigation::SearchEngine;
use crate::voice::DEFAULT_LISTEN_TIMEOUT;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings the window is built from.
#[derive(Clone, Debug)]
pub struct ShellSettings {
    /// Window title.
    pub window_title: String,
    /// Initial window geometry.
    pub dimensions: WindowDimensions,
    /// Homepage used when none has been saved.
    pub default_homepage: String,
    /// Search engine selected at startup.
    pub search_engine: SearchEngine,
    /// Start with incognito mode on.
    pub incognito: bool,
    /// Visited addresses, JSON array.
    pub history_file: PathBuf,
    /// Bookmarks, JSON array.
    pub bookmarks_file: PathBuf,
    /// Saved homepage, one line.
    pub homepage_file: PathBuf,
    /// How long voice search listens.
    pub voice_timeout: Duration,
}

impl ShellSettings {
    /// Keep all preference files under `dir`.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.history_file = dir.join("history.json");
        self.bookmarks_file = dir.join("bookmarks.json");
        self.homepage_file = dir.join("custom_homepage.txt");
        self
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            window_title: "Custom Web Browser".to_string(),
            dimensions: WindowDimensions::default(),
            default_homepage: DEFAULT_HOMEPAGE.to_string(),
            search_engine: SearchEngine::default(),
            incognito: false,
            history_file: PathBuf::from("history.json"),
            bookmarks_file: PathBuf::from("bookmarks.json"),
            homepage_file: PathBuf::from("custom_homepage.txt"),
            voice_timeout: DEFAULT_LISTEN_TIMEOUT,
        }
    }
}

/// Window dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowDimensions {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowDimensions {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            width: 1200,
            height: 800,
        }
    }
}
