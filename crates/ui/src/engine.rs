//! Embedded engine seam.
//!
//! The shell never renders or fetches anything itself. Pages are shown by
//! views that the host engine hands out, and every view is bound to a
//! [`Profile`] that decides where cookies, cache and storage live.

use std::path::PathBuf;
use url::Url;

/// Which storage context a profile represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// The engine's shared, on-disk profile.
    Default,
    /// A throwaway profile that keeps nothing after the process exits.
    OffTheRecord,
}

/// Engine profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    /// Profile name.
    pub name: String,
    /// Storage context.
    pub kind: ProfileKind,
    /// Whether cookies and cache are written to disk.
    pub persistent_storage: bool,
}

impl Profile {
    /// The engine's default profile.
    pub fn default_profile() -> Self {
        Self {
            name: "Default".to_string(),
            kind: ProfileKind::Default,
            persistent_storage: true,
        }
    }

    /// Clone this profile into an off-the-record one.
    pub fn off_the_record(&self) -> Self {
        Self {
            name: format!("{} (Off the record)", self.name),
            kind: ProfileKind::OffTheRecord,
            persistent_storage: false,
        }
    }

    /// Check if this profile is off the record.
    pub fn is_off_the_record(&self) -> bool {
        self.kind == ProfileKind::OffTheRecord
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::default_profile()
    }
}

/// A page view supplied by the engine.
pub trait WebView {
    /// Load a URL.
    fn set_url(&mut self, url: &Url);

    /// The URL currently shown, if any.
    fn url(&self) -> Option<Url>;

    /// Go back in the view's own session history.
    fn back(&mut self);

    /// Go forward in the view's own session history.
    fn forward(&mut self);

    /// Reload the current page.
    fn reload(&mut self);

    /// The profile the view was created with.
    fn profile(&self) -> &Profile;
}

/// The embedded browser engine.
pub trait WebEngine {
    /// The shared profile.
    fn default_profile(&self) -> Profile;

    /// A profile that persists nothing.
    fn off_the_record_profile(&self) -> Profile {
        self.default_profile().off_the_record()
    }

    /// Create a view bound to `profile`.
    fn create_view(&mut self, profile: &Profile) -> Box<dyn WebView>;
}

/// A download the engine is asking the shell to negotiate.
pub trait DownloadRequest {
    /// File name proposed by the server or the engine.
    fn suggested_file_name(&self) -> String;

    /// Source URL.
    fn url(&self) -> Option<Url>;

    /// Set where the file will be written.
    fn set_path(&mut self, path: PathBuf);

    /// Let the engine start the transfer.
    fn accept(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_the_record_clone() {
        let profile = Profile::default_profile();
        let otr = profile.off_the_record();

        assert!(profile.persistent_storage);
        assert!(!profile.is_off_the_record());
        assert!(!otr.persistent_storage);
        assert!(otr.is_off_the_record());
        assert_eq!(otr.name, "Default (Off the record)");
    }
}
