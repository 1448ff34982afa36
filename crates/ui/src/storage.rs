//! Flat-file persistence helpers.

use common::ShellResult;
use std::fs;
use std::path::Path;

/// Read a JSON array of strings. A missing file is an empty list.
pub fn load_list(path: &Path) -> ShellResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Rewrite `path` with `items` as a JSON array.
pub fn save_list(path: &Path, items: &[String]) -> ShellResult<()> {
    let data = serde_json::to_string(items)?;
    fs::write(path, data)?;
    Ok(())
}
