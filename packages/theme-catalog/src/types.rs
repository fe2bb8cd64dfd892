//! Catalog data types.

use serde::{Deserialize, Serialize};

/// Base color stamped on every entry. A placeholder for the downstream
/// app, not a scraped value.
pub const SEED_COLOR: &str = "#2196F3";

/// One scraped template entry.
///
/// Entries carry no identity beyond their position in the catalog;
/// duplicates across sources are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Display name scraped from the marketplace listing
    pub label: String,

    /// Seed color for the downstream theme engine
    pub seed: String,
}

impl ThemeEntry {
    /// Create an entry with the fixed seed color.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            seed: SEED_COLOR.to_string(),
        }
    }
}
