//! Common types shared by the browser shell crates.

pub mod error;

pub use error::{ShellError, ShellResult};
