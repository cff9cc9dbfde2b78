//! Error types for powertable.
//!
//! Errors are `thiserror` enums composed with `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`NetworkError`] - Any failure fetching a page of the people resource
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failed
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures inside the TUI
//!
//! # Recovery Strategy
//!
//! The core (filter, power, state transitions) has no failure modes. Malformed
//! numeric fields turn into `NaN` power values instead of errors.
//!
//! A [`NetworkError`] is never retried. The TUI reports it in the status bar
//! and stays open; `--print` mode returns it and exits non-zero.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```
/// use powertable::model::error::{AppError, NetworkError};
///
/// let err: AppError = NetworkError::Status {
///     url: "https://swapi.dev/api/people".to_string(),
///     status: 503,
/// }
/// .into();
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Fetching the entity list failed.
    #[error("Failed to fetch entities: {0}")]
    Network(#[from] NetworkError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The TUI failed.
    #[error("{0}")]
    Tui(#[from] TuiError),

    /// Writing plain output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure fetching one page of the paginated resource.
///
/// Surfaced unchanged by [`crate::source::fetch_all`]: the first failing page
/// aborts the whole fetch, and results accumulated so far are discarded.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Transport failure: DNS, connection refused, TLS, timeout, or a body
    /// that could not be read.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// URL of the page being fetched.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// URL of the page being fetched.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body was not a valid page document.
    #[error("Invalid page from {url}: {source}")]
    Decode {
        /// URL of the page being fetched.
        url: String,
        /// JSON decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// The background fetch thread went away without reporting a result.
    #[error("Fetch worker terminated unexpectedly")]
    WorkerLost,
}

impl NetworkError {
    /// URL of the page that failed, if the error is tied to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            NetworkError::Request { url, .. }
            | NetworkError::Status { url, .. }
            | NetworkError::Decode { url, .. } => Some(url),
            NetworkError::WorkerLost => None,
        }
    }
}
