//! Browser UI shell.
//!
//! This crate provides the window model of a tabbed browser that sits on
//! top of an embedded engine:
//! - Main window, menu bar and toolbar
//! - Tabs and the tab container
//! - Address resolution and search engines
//! - History, bookmarks and homepage persistence
//! - Downloads
//! - Voice search
//!
//! The engine and the GUI toolkit are reached through the traits in
//! [`engine`], [`dialogs`] and [`voice`].

pub mod bookmarks;
pub mod dialogs;
pub mod downloads;
pub mod engine;
pub mod history;
pub mod homepage;
pub mod menu;
pub mod navigation;
pub mod settings;
pub mod storage;
pub mod tab;
pub mod tab_bar;
pub mod voice;
pub mod window;

#[cfg(test)]
mod testing;

pub use engine::{Profile, ProfileKind, WebEngine, WebView};
pub use settings::ShellSettings;
pub use tab::Tab;
pub use window::BrowserWindow;
