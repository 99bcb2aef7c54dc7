//! Error types for pixscroll.
//!
//! Errors are split by where they are recovered:
//!
//! - [`EmptyQueryError`] - blank search term. Recovered locally by the gallery
//!   controller with a user notice, never propagated.
//! - [`FetchError`] - a page fetch failed (transport, HTTP status, or body
//!   decoding). Caught at the controller boundary and logged; the gallery and
//!   page cursor are left exactly as they were.
//! - [`AppError`] - startup and terminal failures that end the program.
//!
//! Nothing in the fetch path is fatal: every failure returns the controller to
//! `Idle` with display state matching the last successful fetch.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from `main` and the TUI shell. All variants are fatal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is incomplete.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raised by the crossterm/ratatui layer (raw mode, alternate screen,
    /// broken pipe while drawing). Without a working terminal the program
    /// cannot continue.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The HTTP client could not be built (TLS backend initialisation).
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] TransportError),

    /// The background fetch thread could not be spawned.
    #[error("Failed to start fetch worker: {0}")]
    Worker(#[source] std::io::Error),

    /// The HTML gallery export could not be written.
    #[error("Failed to export gallery to {path}: {source}")]
    Export {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<crate::view::TuiError> for AppError {
    fn from(err: crate::view::TuiError) -> Self {
        match err {
            crate::view::TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// The submitted search term was empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use pixscroll::model::error::EmptyQueryError;
///
/// assert_eq!(EmptyQueryError.to_string(), "search term is empty");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("search term is empty")]
pub struct EmptyQueryError;

/// Failure of the HTTP transport itself (connection refused, DNS, TLS, ...).
///
/// The transport is a black box to the rest of the crate, so only the
/// rendered cause is kept.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Wrap a transport failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rendered cause.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single page fetch failed.
///
/// The page cursor only advances on success, so any `FetchError` means the
/// same page will be requested again by the next fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-2xx status.
    #[error("Image API returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL with the API key redacted.
        url: String,
    },

    /// The response body was not the expected JSON document.
    #[error("Invalid response body: {message}")]
    Decode {
        /// `serde_json` error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_converts_into_fetch_error() {
        let err: FetchError = TransportError::new("connection refused").into();
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }

    #[test]
    fn status_error_mentions_code_and_url() {
        let err = FetchError::Status {
            status: 429,
            url: "https://pixabay.com/api/?q=cats".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("q=cats"));
    }

    #[test]
    fn export_error_keeps_io_source() {
        use std::error::Error as _;

        let err = AppError::Export {
            path: PathBuf::from("/tmp/out.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/out.html"));
        assert!(err.source().is_some(), "Export error should expose its cause");
    }
}
