//! Headless engine.

use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use ui::engine::DownloadRequest;
use ui::{Profile, WebEngine, WebView};
use url::Url;

use crate::config::ShellConfig;
use crate::page::{HeadlessView, Page};

/// An engine that tracks navigation without fetching or rendering.
///
/// Stands in for an embedded web engine when the shell runs without a GUI
/// toolkit.
pub struct HeadlessEngine {
    /// Shared profile.
    profile: Profile,
    /// Open pages.
    pages: RwLock<Vec<Arc<Page>>>,
}

impl HeadlessEngine {
    /// Create a new headless engine.
    pub fn new(config: &ShellConfig) -> Self {
        tracing::info!("Headless engine started (data in {})", config.data_dir.display());
        Self {
            profile: Profile::default_profile(),
            pages: RwLock::new(Vec::new()),
        }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&ShellConfig::default())
    }

    /// Get all pages.
    pub fn pages(&self) -> Vec<Arc<Page>> {
        self.pages.read().clone()
    }

    /// Get page count.
    pub fn page_count(&self) -> usize {
        self.pages.read().len()
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl WebEngine for HeadlessEngine {
    fn default_profile(&self) -> Profile {
        self.profile.clone()
    }

    fn create_view(&mut self, profile: &Profile) -> Box<dyn WebView> {
        let page = Arc::new(Page::new(profile.clone()));
        self.pages.write().push(page.clone());
        Box::new(HeadlessView::new(page))
    }
}

/// A download raised by the headless engine.
#[derive(Clone, Debug)]
pub struct HeadlessDownload {
    url: Url,
    file_name: Option<String>,
    path: Option<PathBuf>,
    accepted: bool,
}

impl HeadlessDownload {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            file_name: None,
            path: None,
            accepted: false,
        }
    }

    /// Suggest `name` instead of a name taken from the URL.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

impl DownloadRequest for HeadlessDownload {
    /// The name given by the caller, else the last path segment of the URL,
    /// else `download`.
    fn suggested_file_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        self.url
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .unwrap_or("download")
            .to_string()
    }

    fn url(&self) -> Option<Url> {
        Some(self.url.clone())
    }

    fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    fn accept(&mut self) {
        self.accepted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_creation() {
        let engine = HeadlessEngine::with_defaults();
        assert_eq!(engine.page_count(), 0);
        assert!(!engine.default_profile().is_off_the_record());
    }

    #[test]
    fn test_views_share_pages() {
        let mut engine = HeadlessEngine::with_defaults();
        let otr = engine.off_the_record_profile();

        let mut view = engine.create_view(&otr);
        view.set_url(&Url::parse("https://example.com").unwrap());

        assert_eq!(engine.page_count(), 1);
        let pages = engine.pages();
        let page = &pages[0];
        assert!(page.profile().is_off_the_record());
        assert_eq!(page.url().unwrap().as_str(), "https://example.com/");
    }

    #[test]
    fn test_download_file_name() {
        let download = HeadlessDownload::new(Url::parse("https://example.com/files/a.tar.gz").unwrap());
        assert_eq!(download.suggested_file_name(), "a.tar.gz");

        let download = HeadlessDownload::new(Url::parse("https://example.com/").unwrap());
        assert_eq!(download.suggested_file_name(), "download");

        let download = HeadlessDownload::new(Url::parse("https://example.com/files/a.tar.gz").unwrap())
            .with_file_name("backup.tar.gz");
        assert_eq!(download.suggested_file_name(), "backup.tar.gz");
    }

    #[test]
    fn test_download_accept() {
        let mut download = HeadlessDownload::new(Url::parse("https://example.com/a.zip").unwrap());
        assert!(!download.is_accepted());

        download.set_path(PathBuf::from("/tmp/a.zip"));
        download.accept();

        assert!(download.is_accepted());
        assert_eq!(download.path(), Some(&PathBuf::from("/tmp/a.zip")));
    }
}
