//! Shared HTTP client and page fetching.

use reqwest::Client;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// User agent sent with every marketplace request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Build the HTTP client used by all sources.
///
/// No request timeout is set; a stalled marketplace just stalls the run.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(USER_AGENT).build()
}

/// Fetch raw HTML from a URL, failing on non-success status codes.
pub async fn fetch_html(client: &Client, url: &str) -> SourceResult<String> {
    debug!(url = %url, "HTTP fetch starting");

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status,
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
