//! Mock source for testing.
//!
//! Provides a canned-response implementation of the [`ThemeSource`] trait.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::ThemeSource;
use crate::error::{SourceError, SourceResult};
use crate::types::ThemeEntry;

/// Mock source that yields configured entries or always fails.
///
/// Clones share state, so a test can keep a handle while a boxed clone
/// goes into the source list.
#[derive(Clone)]
pub struct MockSource {
    name: String,
    entries: Option<Vec<ThemeEntry>>,
    fetch_calls: Arc<AtomicUsize>,
}

impl MockSource {
    /// A source that yields the given entries.
    pub fn with_entries(name: impl Into<String>, entries: Vec<ThemeEntry>) -> Self {
        Self {
            name: name.into(),
            entries: Some(entries),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose fetch always fails.
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: None,
            fetch_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `fetch` was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThemeSource for MockSource {
    async fn fetch(&self, _client: &Client) -> SourceResult<Vec<ThemeEntry>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        match &self.entries {
            Some(entries) => Ok(entries.clone()),
            None => Err(SourceError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                url: format!("https://{}.invalid/", self.name),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
