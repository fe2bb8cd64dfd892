//! Marketplace sources behind a common trait.
//!
//! Each source scrapes one category page. Sources are independent: a
//! failing source is logged and skipped, it never blocks the others.

mod bootstrapmade;
mod mock;
mod themeforest;

pub use bootstrapmade::{BootstrapMade, BOOTSTRAPMADE_URL};
pub use mock::MockSource;
pub use themeforest::{ThemeForest, THEMEFOREST_URL};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::error::SourceResult;
use crate::types::ThemeEntry;

/// A marketplace category page that yields theme entries.
#[async_trait]
pub trait ThemeSource: Send + Sync {
    /// Fetch and parse the source's category page.
    ///
    /// Returns the entries in listing order; an empty page is not an
    /// error.
    async fn fetch(&self, client: &Client) -> SourceResult<Vec<ThemeEntry>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// The scraped marketplaces, in catalog order.
pub fn default_sources() -> Vec<Box<dyn ThemeSource>> {
    vec![Box::new(ThemeForest), Box::new(BootstrapMade)]
}

/// Run every source in order and concatenate whatever each one yields.
///
/// Per-source failures are logged and contribute nothing; the remaining
/// sources still run.
pub async fn collect_themes(sources: &[Box<dyn ThemeSource>], client: &Client) -> Vec<ThemeEntry> {
    let mut themes = Vec::new();

    for source in sources {
        match source.fetch(client).await {
            Ok(mut entries) => {
                info!(
                    source = source.name(),
                    count = entries.len(),
                    "Source fetched"
                );
                themes.append(&mut entries);
            }
            Err(e) => {
                warn!(source = source.name(), error = %e, "Source failed, skipping");
            }
        }
    }

    themes
}
