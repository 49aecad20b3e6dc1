//! The crate-wide error type.
//!
//! Every failure the core can produce is one of these kinds. Errors are
//! values returned up the call chain; nothing in the core panics on a
//! remote or filesystem failure. Configuration errors abort startup, all
//! other kinds surface as an inline message in the query view and leave
//! the application running.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Unreadable or incomplete credential/endpoint configuration.
    /// Fatal: checked once at startup, before the terminal enters raw mode.
    #[error("configuration error: {0}")]
    Config(String),

    /// The on-disk token cache exists but cannot be read or parsed.
    /// Propagated, never silently discarded; the user can delete the file.
    #[error("malformed token cache at {}: {reason}", path.display())]
    TokenCache { path: PathBuf, reason: String },

    /// The client-credentials token exchange failed (transport or response).
    #[error("authorization failed: {0}")]
    Authorization(String),

    /// The search request failed in transit or returned a non-2xx status.
    #[error("search request failed: {0}")]
    SearchTransport(#[source] reqwest::Error),

    /// The search response body did not decode into the expected shape.
    #[error("malformed search response: {0}")]
    SearchDecode(#[source] reqwest::Error),

    /// The query was rejected locally before any network call.
    #[error("{0}")]
    Validation(&'static str),
}

impl Error {
    /// User-facing one-liner for the inline error slot of the query view.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
