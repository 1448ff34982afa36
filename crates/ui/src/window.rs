//! Browser window.

use crate::bookmarks::BookmarkStore;
use crate::dialogs::{HostDialogs, HOMEPAGE_FILTER};
use crate::downloads::{DownloadManager, DownloadManagerView};
use crate::engine::{DownloadRequest, WebEngine};
use crate::history::HistoryStore;
use crate::homepage::HomepageStore;
use crate::menu::{MenuBar, MenuCommand, Toolbar};
use crate::navigation::{resolve_input, NavigationAction, SearchEngine};
use crate::settings::{ShellSettings, WindowDimensions};
use crate::tab::Tab;
use crate::tab_bar::TabBar;
use crate::voice::SpeechRecognizer;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The main window: menu bar, toolbar and tabs over engine views.
///
/// Every callback forwards to the engine, the host dialogs or one of the
/// preference stores. Failures are logged and otherwise ignored.
pub struct BrowserWindow {
    /// Embedded engine.
    engine: Box<dyn WebEngine>,
    /// Host dialogs.
    dialogs: Box<dyn HostDialogs>,
    /// Voice search backend.
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    /// Window title.
    title: String,
    /// Window dimensions.
    dimensions: WindowDimensions,
    /// Menu bar.
    menu_bar: MenuBar,
    /// Toolbar.
    toolbar: Toolbar,
    /// Tabs.
    tab_bar: TabBar,
    /// Homepage preference.
    homepage: HomepageStore,
    /// Visited addresses.
    history: HistoryStore,
    /// Bookmarks.
    bookmarks: BookmarkStore,
    /// Accepted downloads.
    downloads: DownloadManager,
    /// Open download manager, if shown.
    download_window: Option<DownloadManagerView>,
    /// Incognito mode.
    incognito: bool,
    /// Selected search engine.
    search_engine: SearchEngine,
    /// Voice search timeout.
    voice_timeout: Duration,
}

impl BrowserWindow {
    /// Build the window and open the first tab on the homepage.
    pub fn new(
        engine: Box<dyn WebEngine>,
        dialogs: Box<dyn HostDialogs>,
        settings: &ShellSettings,
    ) -> Self {
        let homepage = HomepageStore::load(&settings.homepage_file, &settings.default_homepage);
        let history = HistoryStore::load(&settings.history_file);
        let bookmarks = BookmarkStore::load(&settings.bookmarks_file);

        let mut toolbar = Toolbar::new();
        for url in history.entries() {
            toolbar.add_history_item(url);
        }
        if settings.incognito {
            toolbar.set_incognito(true);
        }

        let mut window = Self {
            engine,
            dialogs,
            recognizer: None,
            title: settings.window_title.clone(),
            dimensions: settings.dimensions.clone(),
            menu_bar: MenuBar::create_default(),
            toolbar,
            tab_bar: TabBar::new(),
            homepage,
            history,
            bookmarks,
            downloads: DownloadManager::new(),
            download_window: None,
            incognito: settings.incognito,
            search_engine: settings.search_engine,
            voice_timeout: settings.voice_timeout,
        };

        window.new_tab(None);
        window
    }

    /// Attach a speech recognizer for voice search.
    pub fn with_recognizer(mut self, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Open a tab on `url`, or on the homepage, and make it current.
    ///
    /// The tab's view uses the off-the-record profile while incognito mode
    /// is on.
    pub fn new_tab(&mut self, url: Option<&str>) -> usize {
        let profile = if self.incognito {
            self.engine.off_the_record_profile()
        } else {
            self.engine.default_profile()
        };

        let id = self.tab_bar.next_id();
        let mut tab = Tab::new(id, self.engine.create_view(&profile));

        let target = url.unwrap_or(self.homepage.get());
        match resolve_input(target, self.search_engine) {
            Ok(url) => tab.navigate(&url),
            Err(e) => warn!("Cannot open {}: {}", target, e),
        }

        let index = self.tab_bar.add(tab);
        self.tab_bar.set_current(index);
        debug!(index, profile = %profile.name, "Opened tab");
        index
    }

    /// Load what was typed into the address bar of tab `index`.
    ///
    /// Outside incognito mode the typed text is also added to history, unless
    /// it could not be turned into a URL.
    pub fn load_url(&mut self, index: usize, input: &str) {
        let engine = self.search_engine;
        let Some(tab) = self.tab_bar.get_mut(index) else {
            warn!("No tab at index {}", index);
            return;
        };

        tab.set_address(input);
        match resolve_input(input, engine) {
            Ok(url) => tab.navigate(&url),
            Err(e) => {
                warn!("Cannot open {}: {}", input, e);
                return;
            }
        }

        if !self.incognito {
            if let Err(e) = self.history.append(input) {
                warn!("Failed to save history: {}", e);
            }
            self.toolbar.add_history_item(input);
        }
    }

    /// Load typed text in the current tab.
    pub fn submit_address(&mut self, input: &str) {
        if let Some(index) = self.tab_bar.current_index() {
            self.load_url(index, input);
        }
    }

    /// Open a history entry in a new tab.
    pub fn load_from_history(&mut self, url: &str) -> usize {
        self.new_tab(Some(url))
    }

    /// Open the history dropdown entry at `index`. The placeholder does nothing.
    pub fn select_history_item(&mut self, index: usize) -> Option<usize> {
        let url = self.toolbar.history_item(index)?.to_string();
        Some(self.load_from_history(&url))
    }

    /// Close tab `index`, unless it is the only one.
    pub fn close_tab(&mut self, index: usize) -> bool {
        self.tab_bar.remove(index).is_some()
    }

    /// Make tab `index` current.
    pub fn select_tab(&mut self, index: usize) -> bool {
        self.tab_bar.set_current(index)
    }

    /// Bookmark the page shown in the current tab.
    pub fn save_bookmark(&mut self) {
        let Some(url) = self.tab_bar.current().and_then(|tab| tab.url()) else {
            warn!("No page to bookmark");
            return;
        };

        match self.bookmarks.add(url.as_str()) {
            Ok(()) => info!("Bookmark saved: {}", url),
            Err(e) => warn!("Failed to save bookmark {}: {}", url, e),
        }
    }

    pub fn go_back(&mut self) {
        self.navigate(NavigationAction::Back);
    }

    pub fn go_forward(&mut self) {
        self.navigate(NavigationAction::Forward);
    }

    pub fn reload_page(&mut self) {
        self.navigate(NavigationAction::Reload);
    }

    /// Apply a toolbar navigation button to the current tab.
    pub fn navigate(&mut self, action: NavigationAction) {
        if let Some(tab) = self.tab_bar.current_mut() {
            match action {
                NavigationAction::Back => tab.go_back(),
                NavigationAction::Forward => tab.go_forward(),
                NavigationAction::Reload => tab.reload(),
            }
        }
    }

    /// Flip incognito mode. Only tabs opened afterwards are affected.
    pub fn toggle_incognito_mode(&mut self) -> bool {
        self.incognito = !self.incognito;
        self.toolbar.set_incognito(self.incognito);
        info!(
            "Incognito Mode: {}",
            if self.incognito { "Enabled" } else { "Disabled" }
        );
        self.incognito
    }

    /// Select a search engine by dropdown name.
    pub fn update_search_engine(&mut self, name: &str) -> bool {
        match SearchEngine::from_name(name) {
            Some(engine) => {
                self.search_engine = engine;
                info!("Search engine updated to: {}", engine.name());
                true
            }
            None => {
                warn!("Unknown search engine: {}", name);
                false
            }
        }
    }

    /// Let the user pick a file to use as the homepage.
    pub fn set_custom_homepage(&mut self) {
        let Some(path) = self.dialogs.pick_homepage_file(HOMEPAGE_FILTER) else {
            return;
        };

        let path = path.to_string_lossy().into_owned();
        match self.homepage.set(&path) {
            Ok(()) => info!("Custom homepage set: {}", path),
            Err(e) => warn!("Failed to save homepage {}: {}", path, e),
        }
    }

    /// Negotiate a download the engine raised.
    pub fn handle_download(&mut self, request: &mut dyn DownloadRequest) -> Option<u64> {
        self.downloads.handle(request, self.dialogs.as_mut())
    }

    /// Show the download manager window.
    pub fn show_download_manager(&mut self) -> &DownloadManagerView {
        self.download_window.insert(self.downloads.view())
    }

    /// Listen for a spoken query and load it in the current tab.
    ///
    /// Blocks for up to the voice timeout. Recognition failures are logged
    /// and swallowed.
    pub fn voice_search(&mut self) -> Option<String> {
        let Some(recognizer) = self.recognizer.as_mut() else {
            warn!("Voice search is not available");
            return None;
        };

        info!("Listening...");
        match recognizer.listen(self.voice_timeout) {
            Ok(text) => {
                info!("Voice search: {}", text);
                self.submit_address(&text);
                Some(text)
            }
            Err(e) => {
                warn!("Voice search failed: {}", e);
                None
            }
        }
    }

    /// Run a menu action.
    pub fn dispatch(&mut self, command: MenuCommand) {
        match command {
            MenuCommand::SaveBookmark => self.save_bookmark(),
            MenuCommand::SetCustomHomepage => self.set_custom_homepage(),
            MenuCommand::DownloadManager => {
                self.show_download_manager();
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dimensions(&self) -> &WindowDimensions {
        &self.dimensions
    }

    pub fn menu_bar(&self) -> &MenuBar {
        &self.menu_bar
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn tabs(&self) -> &TabBar {
        &self.tab_bar
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.tab_bar.current()
    }

    pub fn homepage(&self) -> &str {
        self.homepage.get()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn downloads(&self) -> &DownloadManager {
        &self.downloads
    }

    pub fn download_window(&self) -> Option<&DownloadManagerView> {
        self.download_window.as_ref()
    }

    pub fn is_incognito(&self) -> bool {
        self.incognito
    }

    pub fn search_engine(&self) -> SearchEngine {
        self.search_engine
    }
}
