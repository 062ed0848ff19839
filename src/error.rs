//! Error definitions.
//!
//! From a caller's point of view the client has a single failure kind:
//! the transport call did not produce a usable value. [`TransportError`]
//! distinguishes the causes for diagnostics and log messages, but
//! operation methods intercept it and substitute a fallback value, so it
//! never crosses the client's public operation surface.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the hero backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS resolution, timeout, or protocol failure.
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Result type for transport calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors constructing a [`HeroClient`](crate::HeroClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL failed to parse.
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured base URL cannot be extended with an id segment.
    #[error("base URL '{0}' cannot carry path segments")]
    OpaqueBaseUrl(String),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}
