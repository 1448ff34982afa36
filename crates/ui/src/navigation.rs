//! Address resolution and navigation controls.

use common::ShellResult;
use std::path::Path;
use url::{form_urlencoded, Url};

/// Search engines offered in the toolbar dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    DuckDuckGo,
}

impl SearchEngine {
    /// All engines in dropdown order.
    pub fn all() -> &'static [SearchEngine] {
        &[SearchEngine::Google, SearchEngine::Bing, SearchEngine::DuckDuckGo]
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
        }
    }

    /// Query URL template; `{}` is replaced by the encoded query.
    pub fn template(self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q={}",
            SearchEngine::Bing => "https://www.bing.com/search?q={}",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q={}",
        }
    }

    /// Look up an engine by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|engine| engine.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Build the search URL for `query`.
    pub fn search_url(self, query: &str) -> ShellResult<Url> {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        Ok(Url::parse(&self.template().replace("{}", &encoded))?)
    }
}

/// Turn whatever the user typed (or picked) into a URL to load.
///
/// Text starting with `http` is loaded as-is. Absolute paths become `file:`
/// URLs, and `file:`, `about:` and `data:` URLs pass through. Anything else
/// is searched with `engine`.
pub fn resolve_input(input: &str, engine: SearchEngine) -> ShellResult<Url> {
    let input = input.trim();

    if input.starts_with("http") {
        return Ok(Url::parse(input)?);
    }

    if Path::new(input).is_absolute() {
        if let Ok(url) = Url::from_file_path(input) {
            return Ok(url);
        }
    }

    if let Ok(url) = Url::parse(input) {
        if matches!(url.scheme(), "file" | "about" | "data") {
            return Ok(url);
        }
    }

    engine.search_url(input)
}

/// Navigation action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationAction {
    Back,
    Forward,
    Reload,
}
