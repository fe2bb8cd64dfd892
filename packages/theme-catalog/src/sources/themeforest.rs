//! ThemeForest category page source.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use super::ThemeSource;
use crate::client::fetch_html;
use crate::error::SourceResult;
use crate::types::ThemeEntry;

/// Material-design site templates category on ThemeForest.
pub const THEMEFOREST_URL: &str =
    "https://themeforest.net/category/site-templates/material-design";

/// Scrapes theme names from ThemeForest listing thumbnails.
///
/// Each listing is an `a.thumb` anchor whose `title` attribute carries
/// the template name. Anchors with a missing or blank title are skipped.
pub struct ThemeForest;

impl ThemeForest {
    /// Extract entries from a listing page.
    pub fn parse(html: &str) -> Vec<ThemeEntry> {
        let document = Html::parse_document(html);
        let thumb = Selector::parse("a.thumb").unwrap();

        document
            .select(&thumb)
            .filter_map(|el| el.value().attr("title"))
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(ThemeEntry::new)
            .collect()
    }
}

#[async_trait]
impl ThemeSource for ThemeForest {
    async fn fetch(&self, client: &Client) -> SourceResult<Vec<ThemeEntry>> {
        let html = fetch_html(client, THEMEFOREST_URL).await?;
        Ok(Self::parse(&html))
    }

    fn name(&self) -> &str {
        "themeforest"
    }
}
