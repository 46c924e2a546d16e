use thiserror::Error;

use crate::types::ReleaseDatePrecision;

/// Terminal failures of an artist lookup.
///
/// Any of these aborts the whole fetch; no partial dataset is returned.
/// Soft failures (no name-resolution match, no geocode result) never show up
/// here, they degrade to sentinel values on the report instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    /// The credential exchange did not yield an access token. Never retried.
    #[error("failed to obtain an access token: {0}")]
    Auth(String),

    #[error("request to {url} still failing with status {status} after {retries} retries")]
    RetryExhausted {
        url: String,
        retries: u32,
        status: u16,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Http {
        url: String,
        status: u16,
        body: String,
    },

    #[error("request to {url} could not be sent: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no artist found with name {0}")]
    ArtistNotFound(String),

    #[error("no data collected for {0}")]
    NoDataCollected(String),

    #[error("release date {date:?} does not match its precision {precision}")]
    InvalidReleaseDate {
        date: String,
        precision: ReleaseDatePrecision,
    },
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, FetchError>;
