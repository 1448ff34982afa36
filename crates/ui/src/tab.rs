//! Browser tab.

use crate::engine::{ProfileKind, WebView};
use url::Url;

/// Tab identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabId(pub u64);

/// Title given to every new tab.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Placeholder shown in an empty address bar.
pub const ADDRESS_PLACEHOLDER: &str = "Enter URL and press Enter...";

/// A tab: an address bar above an engine view.
pub struct Tab {
    /// Tab ID.
    id: TabId,
    /// Tab title.
    title: String,
    /// Address bar text.
    address: String,
    /// Engine view.
    view: Box<dyn WebView>,
}

impl Tab {
    /// Create a tab around an engine view.
    pub fn new(id: TabId, view: Box<dyn WebView>) -> Self {
        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            address: String::new(),
            view,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Address bar contents.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replace the address bar contents.
    pub fn set_address(&mut self, text: impl Into<String>) {
        self.address = text.into();
    }

    /// URL shown by the view.
    pub fn url(&self) -> Option<Url> {
        self.view.url()
    }

    /// Storage context this tab was opened in.
    pub fn profile_kind(&self) -> ProfileKind {
        self.view.profile().kind
    }

    pub fn navigate(&mut self, url: &Url) {
        tracing::debug!(tab = self.id.0, %url, "Navigating");
        self.view.set_url(url);
    }

    pub fn go_back(&mut self) {
        self.view.back();
    }

    pub fn go_forward(&mut self) {
        self.view.forward();
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    pub fn view(&self) -> &dyn WebView {
        self.view.as_ref()
    }
}
