//! Tab container.

use crate::tab::{Tab, TabId};

/// Ordered tabs with one current tab, like a toolkit tab widget.
pub struct TabBar {
    /// Tabs in display order.
    tabs: Vec<Tab>,
    /// Index of the current tab.
    current: Option<usize>,
    /// Tab ID counter.
    tab_counter: u64,
}

impl TabBar {
    /// Create an empty tab bar.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            current: None,
            tab_counter: 0,
        }
    }

    /// Allocate an id for the next tab.
    pub fn next_id(&mut self) -> TabId {
        self.tab_counter += 1;
        TabId(self.tab_counter)
    }

    /// Append a tab and return its index.
    pub fn add(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        self.tabs.len() - 1
    }

    /// Remove the tab at `index`.
    ///
    /// The last remaining tab cannot be removed.
    pub fn remove(&mut self, index: usize) -> Option<Tab> {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return None;
        }

        let tab = self.tabs.remove(index);

        // Keep the same tab current if possible
        if let Some(current) = self.current {
            self.current = Some(if current > index {
                current - 1
            } else {
                current.min(self.tabs.len() - 1)
            });
        }

        Some(tab)
    }

    /// Make the tab at `index` current.
    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Tab> {
        self.current.and_then(|i| self.tabs.get(i))
    }

    pub fn current_mut(&mut self) -> Option<&mut Tab> {
        self.current.and_then(|i| self.tabs.get_mut(i))
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    /// Find a tab's index by id.
    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Profile, WebEngine};
    use crate::testing::FakeEngine;

    fn bar_with(count: usize) -> TabBar {
        let mut engine = FakeEngine::default();
        let mut bar = TabBar::new();
        for _ in 0..count {
            let id = bar.next_id();
            let index = bar.add(Tab::new(id, engine.create_view(&Profile::default_profile())));
            bar.set_current(index);
        }
        bar
    }

    #[test]
    fn test_tab_bar_creation() {
        let bar = TabBar::new();
        assert_eq!(bar.count(), 0);
        assert!(bar.current().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let bar = bar_with(3);
        assert_eq!(bar.tabs()[0].id(), TabId(1));
        assert_eq!(bar.tabs()[2].id(), TabId(3));
        assert_eq!(bar.position(TabId(2)), Some(1));
    }

    #[test]
    fn test_last_tab_is_kept() {
        let mut bar = bar_with(1);
        assert!(bar.remove(0).is_none());
        assert_eq!(bar.count(), 1);
    }

    #[test]
    fn test_remove_adjusts_current() {
        let mut bar = bar_with(3);
        assert_eq!(bar.current_index(), Some(2));

        // Removing an earlier tab keeps the same tab current
        bar.remove(0);
        assert_eq!(bar.current().unwrap().id(), TabId(3));

        // Removing the current last tab falls back to its neighbour
        bar.remove(1);
        assert_eq!(bar.current().unwrap().id(), TabId(2));
    }

    #[test]
    fn test_out_of_range() {
        let mut bar = bar_with(2);
        assert!(bar.remove(5).is_none());
        assert!(!bar.set_current(5));
        assert_eq!(bar.count(), 2);
    }
}
