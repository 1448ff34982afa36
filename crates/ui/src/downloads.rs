//! Downloads management.

use crate::dialogs::HostDialogs;
use crate::engine::DownloadRequest;
use std::path::PathBuf;
use std::time::SystemTime;
use url::Url;

/// Download manager.
///
/// Only tracks what was handed to the engine. Transfer progress and
/// completion belong to the engine.
pub struct DownloadManager {
    downloads: Vec<Download>,
    id_counter: u64,
}

impl DownloadManager {
    pub fn new() -> Self {
        Self {
            downloads: Vec::new(),
            id_counter: 0,
        }
    }

    /// Ask the user where to save, then accept the request.
    ///
    /// Returns the new download's id, or `None` if the dialog was cancelled.
    pub fn handle(
        &mut self,
        request: &mut dyn DownloadRequest,
        dialogs: &mut dyn HostDialogs,
    ) -> Option<u64> {
        let suggested = request.suggested_file_name();
        let path = dialogs.save_file_path(&suggested)?;

        request.set_path(path.clone());
        request.accept();

        self.id_counter += 1;
        let id = self.id_counter;
        tracing::info!("Download started: {}", path.display());

        self.downloads.push(Download {
            id,
            url: request.url(),
            filename: suggested,
            path,
            started: SystemTime::now(),
        });
        Some(id)
    }

    pub fn get(&self, id: u64) -> Option<&Download> {
        self.downloads.iter().find(|d| d.id == id)
    }

    pub fn all(&self) -> &[Download] {
        &self.downloads
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }

    /// Contents of the download manager window.
    pub fn view(&self) -> DownloadManagerView {
        DownloadManagerView {
            title: "Download Manager".to_string(),
            items: self
                .downloads
                .iter()
                .map(|d| d.path.display().to_string())
                .collect(),
        }
    }
}

impl Default for DownloadManager {
    fn default() -> Self {
        Self::new()
    }
}

/// An accepted download.
#[derive(Clone, Debug)]
pub struct Download {
    pub id: u64,
    pub url: Option<Url>,
    pub filename: String,
    pub path: PathBuf,
    pub started: SystemTime,
}

/// The download manager window: a title and one line per saved path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadManagerView {
    pub title: String,
    pub items: Vec<String>,
}
