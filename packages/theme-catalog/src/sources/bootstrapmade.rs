//! BootstrapMade category page source.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use super::ThemeSource;
use crate::client::fetch_html;
use crate::error::SourceResult;
use crate::types::ThemeEntry;

/// Material-design template category on BootstrapMade.
pub const BOOTSTRAPMADE_URL: &str =
    "https://bootstrapmade.com/bootstrap-template-categories/material-design/";

/// Scrapes theme names from BootstrapMade template cards.
///
/// Each card is a `div.item` whose first `h3` descendant carries the
/// template name. Cards without a heading are skipped. The heading text
/// is kept even when blank, so this source can emit empty labels.
pub struct BootstrapMade;

impl BootstrapMade {
    /// Extract entries from a category page.
    pub fn parse(html: &str) -> Vec<ThemeEntry> {
        let document = Html::parse_document(html);
        let card = Selector::parse("div.item").unwrap();
        let heading = Selector::parse("h3").unwrap();

        document
            .select(&card)
            .filter_map(|item| item.select(&heading).next())
            .map(|h3| h3.text().map(str::trim).collect::<String>())
            .map(ThemeEntry::new)
            .collect()
    }
}

#[async_trait]
impl ThemeSource for BootstrapMade {
    async fn fetch(&self, client: &Client) -> SourceResult<Vec<ThemeEntry>> {
        let html = fetch_html(client, BOOTSTRAPMADE_URL).await?;
        Ok(Self::parse(&html))
    }

    fn name(&self) -> &str {
        "bootstrapmade"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(html: &str) -> Vec<String> {
        BootstrapMade::parse(html)
            .into_iter()
            .map(|e| e.label)
            .collect()
    }

    #[test]
    fn one_entry_per_card_with_heading() {
        let html = r#"
            <div class="item"><h3>Appland</h3></div>
            <div class="item"><p>no heading here</p></div>
            <div class="item"><h3>  Shuffle  </h3></div>
        "#;

        assert_eq!(labels(html), vec!["Appland", "Shuffle"]);
    }

    #[test]
    fn blank_headings_are_kept() {
        let html = r#"<div class="item"><h3>   </h3></div>"#;

        let entries = BootstrapMade::parse(html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "");
    }

    #[test]
    fn uses_first_heading_in_card() {
        let html = r#"<div class="item"><h3>Main</h3><h3>Alt</h3></div>"#;

        assert_eq!(labels(html), vec!["Main"]);
    }

    #[test]
    fn heading_fragments_are_trimmed_and_joined() {
        let html = r#"
            <div class="item">
                <h3>
                    <a href="/templates/knight">Knight</a>
                </h3>
            </div>
        "#;

        assert_eq!(labels(html), vec!["Knight"]);
    }

    #[test]
    fn empty_page_yields_no_entries() {
        assert!(BootstrapMade::parse("<html><body></body></html>").is_empty());
    }
}
