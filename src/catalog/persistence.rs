use std::fs;
use std::path::Path;

use crate::catalog::validate_menu;
use crate::error::Result;
use crate::models::MenuItem;

/// Load a menu from a JSON array of items and validate it.
///
/// Duplicates are an error, not merged.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<MenuItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<MenuItem> = serde_json::from_str(&content)?;
    validate_menu(&items)?;
    Ok(items)
}

/// Save a menu to a JSON file, preserving order.
pub fn save_menu<P: AsRef<Path>>(path: P, items: &[MenuItem]) -> Result<()> {
    validate_menu(items)?;
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
