//! Headless page.

use parking_lot::RwLock;
use std::sync::Arc;
use ui::{Profile, WebView};
use url::Url;

/// A page loaded by the headless engine.
///
/// Nothing is fetched; the page only tracks where it is and how it got
/// there.
pub struct Page {
    /// Profile the page belongs to.
    profile: Profile,
    /// Current URL.
    url: RwLock<Option<Url>>,
    /// Navigation history.
    history: RwLock<NavigationHistory>,
}

impl Page {
    /// Create a new page.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            url: RwLock::new(None),
            history: RwLock::new(NavigationHistory::new()),
        }
    }

    /// Navigate to a URL.
    pub fn navigate(&self, url: &Url) {
        self.history.write().push(url.clone());
        self.load(url);
    }

    fn load(&self, url: &Url) {
        *self.url.write() = Some(url.clone());
        tracing::debug!(profile = %self.profile.name, "Loading: {}", url);
    }

    /// Go back in history.
    pub fn go_back(&self) -> bool {
        let url = self.history.write().back().cloned();
        match url {
            Some(url) => {
                self.load(&url);
                true
            }
            None => false,
        }
    }

    /// Go forward in history.
    pub fn go_forward(&self) -> bool {
        let url = self.history.write().forward().cloned();
        match url {
            Some(url) => {
                self.load(&url);
                true
            }
            None => false,
        }
    }

    /// Reload the page.
    pub fn reload(&self) {
        if let Some(url) = self.url() {
            self.load(&url);
        }
    }

    /// Get current URL.
    pub fn url(&self) -> Option<Url> {
        self.url.read().clone()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

/// Engine view over a shared page.
pub struct HeadlessView {
    page: Arc<Page>,
}

impl HeadlessView {
    pub fn new(page: Arc<Page>) -> Self {
        Self { page }
    }
}

impl WebView for HeadlessView {
    fn set_url(&mut self, url: &Url) {
        self.page.navigate(url);
    }

    fn url(&self) -> Option<Url> {
        self.page.url()
    }

    fn back(&mut self) {
        self.page.go_back();
    }

    fn forward(&mut self) {
        self.page.go_forward();
    }

    fn reload(&mut self) {
        self.page.reload();
    }

    fn profile(&self) -> &Profile {
        self.page.profile()
    }
}

/// Navigation history.
#[derive(Debug)]
pub struct NavigationHistory {
    /// History entries.
    entries: Vec<Url>,
    /// Current position, one past the current entry.
    position: usize,
}

impl NavigationHistory {
    /// Create a new history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Push a URL to history.
    pub fn push(&mut self, url: Url) {
        // Remove forward entries if we're not at the end
        if self.position < self.entries.len() {
            self.entries.truncate(self.position);
        }

        self.entries.push(url);
        self.position = self.entries.len();
    }

    /// Go back.
    pub fn back(&mut self) -> Option<&Url> {
        if self.position > 1 {
            self.position -= 1;
            self.entries.get(self.position - 1)
        } else {
            None
        }
    }

    /// Go forward.
    pub fn forward(&mut self) -> Option<&Url> {
        if self.position < self.entries.len() {
            self.position += 1;
            self.entries.get(self.position - 1)
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[Url] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_page_navigation() {
        let page = Page::new(Profile::default_profile().off_the_record());
        assert!(page.url().is_none());

        page.navigate(&url("https://example.com"));

        assert_eq!(page.url().unwrap().host_str(), Some("example.com"));
        assert!(page.profile().is_off_the_record());
    }

    #[test]
    fn test_back_forward_reload() {
        let page = Page::new(Profile::default_profile());
        assert!(!page.go_back());

        page.navigate(&url("https://a.com"));
        page.navigate(&url("https://b.com"));

        assert!(page.go_back());
        assert_eq!(page.url(), Some(url("https://a.com")));
        assert!(!page.go_back());

        assert!(page.go_forward());
        assert_eq!(page.url(), Some(url("https://b.com")));
        assert!(!page.go_forward());

        page.reload();
        assert_eq!(page.url(), Some(url("https://b.com")));
    }

    #[test]
    fn test_navigation_history() {
        let mut history = NavigationHistory::new();

        history.push(url("https://example.com"));
        history.push(url("https://example.com/page1"));
        history.push(url("https://example.com/page2"));

        assert!(history.forward().is_none());
        assert_eq!(history.back(), Some(&url("https://example.com/page1")));

        // A new visit drops the forward entry
        history.push(url("https://example.com/page3"));
        assert!(history.forward().is_none());
        assert_eq!(
            history.entries(),
            &[
                url("https://example.com"),
                url("https://example.com/page1"),
                url("https://example.com/page3"),
            ]
        );
    }
}
