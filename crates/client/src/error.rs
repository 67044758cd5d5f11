use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by client operations.
///
/// Every network-facing variant names the operation it came from so a
/// failure can be diagnosed without further context. Nothing is retried
/// and nothing is swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or empty credential at construction time.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input rejected before any request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request never completed (connection, DNS, timeout).
    #[error("{operation}: failed to execute request")]
    Transport {
        /// Operation that issued the request.
        operation: String,
        /// Underlying transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not decode into the expected envelope.
    #[error("{operation}: failed to decode response")]
    Decode {
        /// Operation that issued the request.
        operation: String,
        /// Underlying decode failure.
        #[source]
        source: reqwest::Error,
    },

    /// The response status differed from the expected one.
    #[error("{operation}: unexpected status {status}, expected {expected}")]
    Status {
        /// Operation that issued the request.
        operation: String,
        /// Status the server returned.
        status: StatusCode,
        /// Status the operation requires.
        expected: StatusCode,
    },

    /// A well-formed, well-statused response carried a non-empty `errors`
    /// field.
    #[error("{operation}: api reported errors: {errors}")]
    Api {
        /// Operation that issued the request.
        operation: String,
        /// The `errors` payload as returned by the service.
        errors: serde_json::Value,
    },

    /// A pagination link that could not be interpreted.
    #[error("{operation}: {source}")]
    Pagination {
        /// Operation that fetched the envelope.
        operation: String,
        /// Underlying link failure.
        #[source]
        source: models::PaginationError,
    },
}

/// Failure while aggregating a multi-page listing.
///
/// Pages fetched before the failure are preserved in `collected`, so the
/// caller receives the partial result alongside the terminating error
/// instead of losing it.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ListAllError<T> {
    /// Items aggregated before the failure, in server order.
    pub collected: Vec<T>,
    /// The terminating error.
    #[source]
    pub source: Error,
}
