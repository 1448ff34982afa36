//! Homepage preference.

use common::ShellResult;
use std::fs;
use std::path::PathBuf;

/// Homepage used when no preference has been saved.
pub const DEFAULT_HOMEPAGE: &str = "https://www.google.com";

/// The page new tabs open on.
pub struct HomepageStore {
    path: PathBuf,
    homepage: String,
}

impl HomepageStore {
    /// Read the saved homepage, falling back to `default`.
    pub fn load(path: impl Into<PathBuf>, default: &str) -> Self {
        let path = path.into();
        let homepage = match fs::read_to_string(&path) {
            Ok(contents) if !contents.trim().is_empty() => contents.trim().to_string(),
            Ok(_) => default.to_string(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => default.to_string(),
            Err(e) => {
                tracing::warn!("Could not read homepage from {}: {}", path.display(), e);
                default.to_string()
            }
        };

        Self { path, homepage }
    }

    /// Replace the homepage and persist it.
    pub fn set(&mut self, homepage: &str) -> ShellResult<()> {
        fs::write(&self.path, homepage)?;
        self.homepage = homepage.to_string();
        Ok(())
    }

    pub fn get(&self) -> &str {
        &self.homepage
    }
}
