//! Marketplace scraper that builds the bundled theme catalog.
//!
//! Two marketplace category pages are scraped for material-design site
//! templates. The resulting entries are concatenated in source order and
//! written as a JSON asset for the downstream app to bundle.
//!
//! # Modules
//!
//! - [`client`] - shared HTTP client and page fetching
//! - [`sources`] - per-marketplace scrapers behind the [`ThemeSource`] trait
//! - [`catalog`] - JSON serialization and the output asset path
//! - [`error`] - typed source errors

pub mod catalog;
pub mod client;
pub mod error;
pub mod sources;
pub mod types;

// Re-export core types at crate root
pub use catalog::{save_catalog, OUTPUT_PATH};
pub use client::build_client;
pub use error::{SourceError, SourceResult};
pub use sources::{
    collect_themes, default_sources, BootstrapMade, MockSource, ThemeForest, ThemeSource,
};
pub use types::{ThemeEntry, SEED_COLOR};
