//! Menu bar and toolbar.

use crate::navigation::SearchEngine;

/// Action bound to a menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    SaveBookmark,
    SetCustomHomepage,
    DownloadManager,
}

/// Menu bar.
pub struct MenuBar {
    menus: Vec<Menu>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self { menus: Vec::new() }
    }

    pub fn add_menu(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Find the command behind `menu` > `item`.
    pub fn command(&self, menu: &str, item: &str) -> Option<MenuCommand> {
        self.menus
            .iter()
            .find(|m| m.label == menu)?
            .items
            .iter()
            .find(|i| i.label == item)
            .map(|i| i.command)
    }

    pub fn create_default() -> Self {
        let mut bar = Self::new();

        bar.add_menu(Menu::new("File")
            .add_item(MenuItem::new("Save Bookmark", MenuCommand::SaveBookmark))
            .add_item(MenuItem::new("Set Custom Homepage", MenuCommand::SetCustomHomepage))
            .add_item(MenuItem::new("Download Manager", MenuCommand::DownloadManager)));

        bar
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::create_default()
    }
}

/// A menu.
#[derive(Clone, Debug)]
pub struct Menu {
    label: String,
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            items: Vec::new(),
        }
    }

    pub fn add_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

/// Menu item.
#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: String,
    pub command: MenuCommand,
}

impl MenuItem {
    pub fn new(label: &str, command: MenuCommand) -> Self {
        Self {
            label: label.to_string(),
            command,
        }
    }
}

/// Label of the history dropdown's first entry.
pub const HISTORY_PLACEHOLDER: &str = "History";

/// Toolbar state: button labels and dropdown contents.
pub struct Toolbar {
    incognito_label: String,
    search_engines: Vec<String>,
    history_items: Vec<String>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            incognito_label: "Incognito Mode".to_string(),
            search_engines: SearchEngine::all()
                .iter()
                .map(|e| e.name().to_string())
                .collect(),
            history_items: vec![HISTORY_PLACEHOLDER.to_string()],
        }
    }

    /// Fixed buttons, in order, around the two dropdowns.
    pub fn buttons(&self) -> [&str; 5] {
        ["Back", "Forward", "Reload", self.incognito_label.as_str(), "+"]
    }

    pub fn incognito_label(&self) -> &str {
        &self.incognito_label
    }

    pub fn set_incognito(&mut self, on: bool) {
        self.incognito_label = if on {
            "Incognito Mode (ON)".to_string()
        } else {
            "Incognito Mode (OFF)".to_string()
        };
    }

    pub fn search_engines(&self) -> &[String] {
        &self.search_engines
    }

    /// History dropdown items, placeholder first.
    pub fn history_items(&self) -> &[String] {
        &self.history_items
    }

    pub fn add_history_item(&mut self, url: &str) {
        self.history_items.push(url.to_string());
    }

    /// The URL at dropdown `index`, or `None` for the placeholder.
    pub fn history_item(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.history_items.get(index).map(String::as_str)
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let bar = MenuBar::create_default();
        assert_eq!(bar.menus().len(), 1);
        assert_eq!(bar.menus()[0].label(), "File");
        assert_eq!(bar.menus()[0].items().len(), 3);
        assert_eq!(
            bar.command("File", "Set Custom Homepage"),
            Some(MenuCommand::SetCustomHomepage)
        );
        assert_eq!(bar.command("File", "Quit"), None);
    }

    #[test]
    fn test_incognito_label() {
        let mut toolbar = Toolbar::new();
        assert_eq!(toolbar.incognito_label(), "Incognito Mode");

        toolbar.set_incognito(true);
        assert_eq!(toolbar.buttons()[3], "Incognito Mode (ON)");

        toolbar.set_incognito(false);
        assert_eq!(toolbar.incognito_label(), "Incognito Mode (OFF)");
    }

    #[test]
    fn test_history_dropdown() {
        let mut toolbar = Toolbar::new();
        toolbar.add_history_item("https://a.com");

        assert_eq!(toolbar.history_items(), &["History", "https://a.com"]);
        assert_eq!(toolbar.history_item(0), None);
        assert_eq!(toolbar.history_item(1), Some("https://a.com"));
        assert_eq!(toolbar.history_item(2), None);
        assert_eq!(toolbar.search_engines(), &["Google", "Bing", "DuckDuckGo"]);
    }
}
