//! Catalog serialization and the output asset path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::ThemeEntry;

/// Where the downstream app expects the bundled catalog.
pub const OUTPUT_PATH: &str = "app/src/main/assets/themes.json";

/// Write the catalog as pretty-printed JSON, creating parent directories
/// as needed.
///
/// Returns `false` without touching the filesystem when `themes` is
/// empty. Overwrites any existing file; the write is not atomic, so a
/// crash mid-write can leave a truncated file.
pub fn save_catalog(path: &Path, themes: &[ThemeEntry]) -> Result<bool> {
    if themes.is_empty() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(themes).context("Failed to serialize catalog")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), count = themes.len(), "Catalog written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_catalog_is_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets").join("themes.json");

        let written = save_catalog(&path, &[]).unwrap();

        assert!(!written);
        assert!(!path.exists());
        assert!(!path.parent().unwrap().exists());
    }

    #[test]
    fn writes_pretty_json_and_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app").join("assets").join("themes.json");
        let themes = vec![ThemeEntry::new("Foo")];

        assert!(save_catalog(&path, &themes).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "[\n  {\n    \"label\": \"Foo\",\n    \"seed\": \"#2196F3\"\n  }\n]"
        );
    }

    #[test]
    fn keeps_non_ascii_unescaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("themes.json");
        let themes = vec![ThemeEntry::new("Ωmega Café")];

        save_catalog(&path, &themes).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Ωmega Café"));
        assert!(!contents.contains("\\u"));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("themes.json");

        save_catalog(&path, &[ThemeEntry::new("Old")]).unwrap();
        save_catalog(&path, &[ThemeEntry::new("New")]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("New"));
        assert!(!contents.contains("Old"));
    }

    #[test]
    fn round_trips_through_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("themes.json");
        let themes = vec![ThemeEntry::new("Nova"), ThemeEntry::new("Shuffle")];

        save_catalog(&path, &themes).unwrap();

        let parsed: Vec<ThemeEntry> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, themes);
    }
}
