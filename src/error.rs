// src/error.rs
use thiserror::Error;

/// Everything the library can fail with.
///
/// Callers mostly swallow these: a failed wiki request means no rows get
/// injected, a failed parse means "Unknown" rows. See `scrape` and `runner`.
#[derive(Debug, Error)]
pub enum FlagsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("HTTP error: status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("icon decode failed: {0}")]
    Icon(#[from] base64::DecodeError),
}
