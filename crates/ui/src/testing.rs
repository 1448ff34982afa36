//! In-memory engine for unit tests.

use crate::engine::{Profile, WebEngine, WebView};
use url::Url;

#[derive(Default)]
pub(crate) struct FakeEngine;

impl WebEngine for FakeEngine {
    fn default_profile(&self) -> Profile {
        Profile::default_profile()
    }

    fn create_view(&mut self, profile: &Profile) -> Box<dyn WebView> {
        Box::new(FakeView {
            profile: profile.clone(),
            entries: Vec::new(),
            index: 0,
        })
    }
}

pub(crate) struct FakeView {
    profile: Profile,
    entries: Vec<Url>,
    index: usize,
}

impl WebView for FakeView {
    fn set_url(&mut self, url: &Url) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.clone());
        self.index = self.entries.len() - 1;
    }

    fn url(&self) -> Option<Url> {
        self.entries.get(self.index).cloned()
    }

    fn back(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    fn forward(&mut self) {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
        }
    }

    fn reload(&mut self) {}

    fn profile(&self) -> &Profile {
        &self.profile
    }
}
