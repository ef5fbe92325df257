//! APOD HTTP client for the browser.
//!
//! Client-side (csr): one real GET per fetch via `gloo-net`, headers and body
//! together raced against a `gloo-timers` deadline. Native builds: a stub that always reports the
//! remote source as unreachable, since there is no browser `fetch`.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors and timeouts both surface as `FetchError::Unreachable`;
//! status and body interpretation is delegated to `astropic::parse_response`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use std::time::Duration;

use astropic::{ApodConfig, ApodRecord, ApodSource, CalendarDate, FetchError};

/// Fetches APOD entries from the configured endpoint.
#[derive(Clone, Debug)]
pub struct GlooSource {
    config: ApodConfig,
}

impl GlooSource {
    pub fn new(config: ApodConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl ApodSource for GlooSource {
    async fn fetch(&self, date: CalendarDate) -> Result<ApodRecord, FetchError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.request_url(date);
            let exchange = async {
                let response = gloo_net::http::Request::get(&url)
                    .send()
                    .await
                    .map_err(|e| FetchError::Unreachable(e.to_string()))?;
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .map_err(|e| FetchError::Unreachable(e.to_string()))?;
                Ok((status, body))
            };
            let deadline = gloo_timers::future::TimeoutFuture::new(timeout_millis(self.config.timeout));

            let (status, body) = with_deadline(exchange, deadline, self.config.timeout).await?;
            astropic::parse_response(status, &body, date)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.config, date);
            Err(FetchError::Unreachable("not available outside the browser".to_owned()))
        }
    }
}

/// Race `work` against `deadline`; the deadline firing first is `Unreachable`.
///
/// `work` must cover the whole exchange, body included, since a server can
/// send headers and then stall.
#[cfg(any(test, feature = "csr"))]
async fn with_deadline<T, W, D>(work: W, deadline: D, timeout: Duration) -> Result<T, FetchError>
where
    W: Future<Output = Result<T, FetchError>>,
    D: Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(work), Box::pin(deadline)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(FetchError::Unreachable(timeout_message(timeout))),
    }
}

/// Deadline in milliseconds for `TimeoutFuture`, saturating at `u32::MAX`.
#[cfg(any(test, feature = "csr"))]
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(any(test, feature = "csr"))]
fn timeout_message(timeout: Duration) -> String {
    format!("no response within {}s", timeout.as_secs())
}
