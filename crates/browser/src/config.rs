//! Shell configuration.

use std::path::PathBuf;
use std::time::Duration;

use ui::navigation::SearchEngine;
use ui::ShellSettings;

/// Process-level configuration, usually filled from the command line.
#[derive(Clone, Debug)]
pub struct ShellConfig {
    /// Directory holding history, bookmarks and the homepage file.
    pub data_dir: PathBuf,
    /// Homepage used until one is picked.
    pub default_homepage: String,
    /// Search engine selected at startup.
    pub search_engine: SearchEngine,
    /// Start in incognito mode.
    pub incognito: bool,
    /// How long voice search listens.
    pub voice_timeout: Duration,
    /// Where downloads are saved. Downloads are refused without one.
    pub download_dir: Option<PathBuf>,
}

impl ShellConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the fallback homepage.
    pub fn with_default_homepage(mut self, homepage: &str) -> Self {
        self.default_homepage = homepage.to_string();
        self
    }

    /// Set the startup search engine.
    pub fn with_search_engine(mut self, engine: SearchEngine) -> Self {
        self.search_engine = engine;
        self
    }

    /// Start in incognito mode.
    pub fn with_incognito(mut self, incognito: bool) -> Self {
        self.incognito = incognito;
        self
    }

    /// Set the voice search timeout.
    pub fn with_voice_timeout(mut self, timeout: Duration) -> Self {
        self.voice_timeout = timeout;
        self
    }

    /// Set the download directory.
    pub fn with_download_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.download_dir = dir;
        self
    }

    /// Settings for the browser window.
    pub fn settings(&self) -> ShellSettings {
        ShellSettings {
            default_homepage: self.default_homepage.clone(),
            search_engine: self.search_engine,
            incognito: self.incognito,
            voice_timeout: self.voice_timeout,
            ..ShellSettings::default().in_dir(&self.data_dir)
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        let settings = ShellSettings::default();
        Self {
            data_dir: PathBuf::from("."),
            default_homepage: settings.default_homepage,
            search_engine: settings.search_engine,
            incognito: settings.incognito,
            voice_timeout: settings.voice_timeout,
            download_dir: None,
        }
    }
}
