//! Async fetch seam between the state machine and the network.
//!
//! The browser client implements this over `gloo-net`; tests implement it
//! with canned or hand-released responses. `?Send` because browser futures
//! are not `Send`.

use crate::date::CalendarDate;
use crate::error::FetchError;
use crate::record::ApodRecord;

/// Something that can resolve one archive date to a record.
///
/// Implementations issue exactly one request per call: no retries, no
/// caching, no deduplication of identical in-flight requests.
#[async_trait::async_trait(?Send)]
pub trait ApodSource {
    /// Fetch the entry for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unreachable`] on transport failure or timeout,
    /// [`FetchError::RemoteRejected`] on a non-success status, and
    /// [`FetchError::MalformedResponse`] when the body cannot be normalized.
    async fn fetch(&self, date: CalendarDate) -> Result<ApodRecord, FetchError>;
}
