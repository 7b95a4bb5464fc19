use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a client-credentials exchange.
///
/// Renewal errors never reach lookup callers: the previous token (possibly
/// still unset) is kept and the next scheduled renewal retries the
/// exchange.
#[derive(Debug, Error)]
pub enum RenewalError {
    #[error("token exchange request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token exchange rejected with status {0}")]
    Status(StatusCode),
}

/// Failure of a single catalog lookup, surfaced to the caller of that
/// lookup. Lookups are not retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("catalog request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("catalog request rejected with status {0}")]
    Status(StatusCode),

    /// The API rejected the bearer token: it either expired between renewal
    /// cycles or the first renewal has not completed yet.
    #[error("access token is stale or not yet issued")]
    StaleToken,

    #[error("unexpected response shape: {0}")]
    Malformed(#[source] reqwest::Error),
}
