//! Error taxonomy shared by the estimator and the profiler.
//!
//! Validation and lookup failures are caller-input bugs and are raised before
//! any computation. Fetch failures are recoverable: the caller can retry or
//! fall back to entering a page size by hand.

use thiserror::Error;

/// Top-level error returned by core operations.
#[derive(Debug, Error)]
pub enum CarbonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CarbonError {
    /// True when retrying (or switching to manual input) can succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CarbonError::Fetch(_))
    }
}

/// Bad or missing input value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending input (e.g. "page size", "url").
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Value outside one of the fixed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown region {0:?}; expected one of north-america, europe, asia, oceania, south-america, africa")]
    Region(String),
    #[error("unknown hosting type {0:?}; expected standard or green")]
    Hosting(String),
}

/// The page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or other transport-level failure.
    #[error("could not reach {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Server answered with a non-2xx status.
    #[error("{url} returned HTTP {code}")]
    Status { url: String, code: u32 },
    /// Response body exceeded the configured ceiling; the transfer was aborted.
    #[error("{url} sent more than {limit} bytes; giving up")]
    BodyTooLarge { url: String, limit: u64 },
    /// Transfer did not finish in time.
    #[error("fetching {url} timed out after {secs}s")]
    TimedOut { url: String, secs: u64 },
    /// Blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
