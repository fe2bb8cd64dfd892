// Scrapes the marketplace category pages and writes the theme catalog
// asset consumed by the app.

use std::path::Path;

use anyhow::{Context, Result};
use theme_catalog::{build_client, collect_themes, default_sources, save_catalog, OUTPUT_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = build_client().context("Failed to create HTTP client")?;
    let sources = default_sources();

    let themes = collect_themes(&sources, &client).await;

    if save_catalog(Path::new(OUTPUT_PATH), &themes)? {
        tracing::info!(count = themes.len(), path = OUTPUT_PATH, "Saved theme catalog");
    } else {
        tracing::info!("No themes found, catalog not written");
    }

    Ok(())
}
