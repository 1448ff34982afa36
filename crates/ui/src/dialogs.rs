//! Host toolkit dialogs.

use std::path::{Path, PathBuf};

/// Name filter used when picking a homepage file.
pub const HOMEPAGE_FILTER: &str = "HTML Files (*.html);;All Files (*)";

/// Modal dialogs provided by the GUI toolkit.
///
/// Both methods return `None` when the user cancels.
pub trait HostDialogs {
    /// Ask for an existing or new file to use as the homepage.
    fn pick_homepage_file(&mut self, filter: &str) -> Option<PathBuf>;

    /// Ask where to save a download, starting from `suggested`.
    fn save_file_path(&mut self, suggested: &str) -> Option<PathBuf>;
}

/// Dialogs that answer without asking anyone.
///
/// Downloads go into `download_dir` under their suggested name. The homepage
/// picker returns whatever was queued with [`AutoDialogs::queue_homepage`].
#[derive(Clone, Debug, Default)]
pub struct AutoDialogs {
    download_dir: Option<PathBuf>,
    homepage: Option<PathBuf>,
}

impl AutoDialogs {
    pub fn new(download_dir: Option<PathBuf>) -> Self {
        Self {
            download_dir,
            homepage: None,
        }
    }

    /// Answer the next homepage picker with `path`.
    pub fn queue_homepage(&mut self, path: impl AsRef<Path>) {
        self.homepage = Some(path.as_ref().to_path_buf());
    }
}

impl HostDialogs for AutoDialogs {
    fn pick_homepage_file(&mut self, _filter: &str) -> Option<PathBuf> {
        self.homepage.take()
    }

    fn save_file_path(&mut self, suggested: &str) -> Option<PathBuf> {
        if suggested.is_empty() {
            return None;
        }
        self.download_dir.as_ref().map(|dir| dir.join(suggested))
    }
}
