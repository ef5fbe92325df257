//! Error types for date construction and APOD fetches.
//!
//! DESIGN
//! ======
//! Every fetch failure collapses into `FetchState::Failed` at the state
//! machine boundary, so `FetchError` is `Clone + PartialEq` and carries only
//! owned diagnostic text rather than the underlying transport error.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

/// Failure reasons for a single APOD fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No response arrived: transport error, aborted request, or timeout.
    #[error("remote source unreachable: {0}")]
    Unreachable(String),

    /// The remote source answered with a non-success HTTP status.
    #[error("remote source rejected request: status {0}")]
    RemoteRejected(u16),

    /// The body was not JSON or lacked a required field.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Stable machine-readable code for logs and UI diagnostics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "E_UNREACHABLE",
            Self::RemoteRejected(_) => "E_REMOTE_REJECTED",
            Self::MalformedResponse(_) => "E_MALFORMED_RESPONSE",
        }
    }
}

/// Errors produced when constructing a [`crate::CalendarDate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The text is not a `YYYY-MM-DD` Gregorian date.
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    Invalid(String),

    /// The date precedes the first archive entry.
    #[error("{0} is before the first APOD (1995-06-16)")]
    BeforeArchive(String),

    /// The date is later than today.
    #[error("{0} is in the future")]
    InFuture(String),
}
