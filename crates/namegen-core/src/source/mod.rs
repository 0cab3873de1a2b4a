//! Template and word table sources
//!
//! The construction template and the word table live outside this crate
//! (local files or remote object storage). A [`Source`] fetches both; failures
//! are fatal at startup and never retried here.

mod file;
mod http;

pub use file::FileSource;
pub use http::{build_client, HttpSource, DEFAULT_TIMEOUT, USER_AGENT};

use std::path::PathBuf;
use thiserror::Error;

/// Source fetch errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Supplier of the raw template text and word table
pub trait Source: Send + Sync {
    /// Fetch the construction template as stored
    fn fetch_template_text(&self) -> Result<String, TransportError>;

    /// Fetch the tab-separated word table as stored
    fn fetch_word_table(&self) -> Result<String, TransportError>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Remove line breaks from authored template text
///
/// Line breaks carry no meaning in the construction language, including
/// inside quoted literals.
pub fn strip_line_breaks(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}
