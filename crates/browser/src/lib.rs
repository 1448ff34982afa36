//! Tabbed Browser - a tabbed browser shell over an embedded web engine.
//!
//! This crate puts the UI shell on its feet:
//! - Configuration
//! - A headless engine for running without a GUI toolkit
//! - A console host that drives the window from text commands

pub mod config;
pub mod console;
pub mod engine;
pub mod page;

pub use config::ShellConfig;
pub use console::Console;
pub use engine::HeadlessEngine;
pub use page::Page;

/// Browser version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

