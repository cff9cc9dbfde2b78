//! Entity sources.
//!
//! This module provides:
//! - [`PageSource`]: one request for one page of the people resource
//! - [`fetch_all`]: sequential pagination over a `PageSource`
//! - [`HttpPageSource`]: the reqwest-backed production source
//! - [`spawn_fetch`]: runs `fetch_all` off the UI thread

use crate::model::{Entity, NetworkError, PeoplePage};
use tracing::{debug, info};

pub mod background;
pub mod http;

pub use background::{FetchHandle, FetchStatus, spawn_fetch};
pub use http::{FetchConfig, HttpPageSource};

/// Source of individual pages.
///
/// `Send + Sync` so a source can be moved to the background fetch thread.
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the request fails, the status is not a
    /// success, or the body is not a page document.
    fn fetch_page(&self, url: &str) -> Result<PeoplePage, NetworkError>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_page(&self, url: &str) -> Result<PeoplePage, NetworkError> {
        (**self).fetch_page(url)
    }
}

/// Fetch every entity, following `next` links from `start_url`.
///
/// Pages are requested one at a time; each request depends on the previous
/// page's `next`. Results are concatenated in delivery order without
/// deduplication.
///
/// # Errors
///
/// The first failing page aborts the fetch and its error is returned as is.
/// There is no retry.
pub fn fetch_all<S: PageSource + ?Sized>(
    source: &S,
    start_url: &str,
) -> Result<Vec<Entity>, NetworkError> {
    let mut entities = Vec::new();
    let mut next_url = Some(start_url.to_string());
    let mut pages = 0usize;

    while let Some(url) = next_url.take() {
        let page = source.fetch_page(&url)?;
        pages += 1;
        debug!(
            url = %url,
            results = page.results.len(),
            has_next = page.next.is_some(),
            "fetched page"
        );

        entities.extend(page.results);
        next_url = page.next;
    }

    info!(pages, entities = entities.len(), "fetch complete");
    Ok(entities)
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory page source shared by tests.

    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned pages by URL and records each request.
    #[derive(Debug, Default)]
    pub struct StaticPageSource {
        pages: HashMap<String, PeoplePage>,
        failures: HashMap<String, u16>,
        requests: Mutex<Vec<String>>,
    }

    impl StaticPageSource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serve `results` at `url`, linking to `next`.
        pub fn with_page(mut self, url: &str, results: Vec<Entity>, next: Option<&str>) -> Self {
            self.pages.insert(
                url.to_string(),
                PeoplePage {
                    count: 0,
                    next: next.map(str::to_string),
                    previous: None,
                    results,
                },
            );
            self
        }

        /// Answer requests for `url` with HTTP `status`.
        pub fn with_failure(mut self, url: &str, status: u16) -> Self {
            self.failures.insert(url.to_string(), status);
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PageSource for StaticPageSource {
        fn fetch_page(&self, url: &str) -> Result<PeoplePage, NetworkError> {
            self.requests.lock().unwrap().push(url.to_string());
            if let Some(status) = self.failures.get(url) {
                return Err(NetworkError::Status {
                    url: url.to_string(),
                    status: *status,
                });
            }
            self.pages.get(url).cloned().ok_or(NetworkError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
