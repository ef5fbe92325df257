//! Normalized APOD record and response parsing.
//!
//! Pure parsing in `parse_response` keeps the fetch client testable without a
//! network: the HTTP layer hands over a status and a body, nothing else.

use serde::Deserialize;

use crate::date::CalendarDate;
use crate::error::FetchError;

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;

/// Kind of media an entry points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// One archive entry, normalized from the remote JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApodRecord {
    pub title: String,
    pub explanation: String,
    /// Display-resolution image, or the embed URL for videos.
    pub url: String,
    /// High-resolution image, only when the remote source supplied one.
    pub hd_url: Option<String>,
    pub media_type: MediaType,
    /// The date this record was requested for.
    pub date: CalendarDate,
    pub copyright: Option<String>,
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct WireRecord {
    title: String,
    explanation: String,
    url: String,
    #[serde(default)]
    hdurl: Option<String>,
    #[serde(default)]
    media_type: Option<MediaType>,
    date: String,
    #[serde(default)]
    copyright: Option<String>,
}

/// Turn a raw HTTP exchange into a record for `requested`.
///
/// # Errors
///
/// Returns [`FetchError::RemoteRejected`] for any non-2xx status and
/// [`FetchError::MalformedResponse`] when the body is not JSON or lacks
/// `title`, `explanation`, `url`, or `date`.
pub fn parse_response(status: u16, body: &str, requested: CalendarDate) -> Result<ApodRecord, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::RemoteRejected(status));
    }

    let wire: WireRecord =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

    let requested_iso = requested.to_string();
    if wire.date != requested_iso {
        tracing::debug!(requested = %requested_iso, served = %wire.date, "remote served a different date");
    }

    Ok(ApodRecord {
        title: wire.title,
        explanation: wire.explanation,
        url: wire.url,
        hd_url: wire.hdurl.filter(|u| !u.trim().is_empty()),
        media_type: wire.media_type.unwrap_or_default(),
        date: requested,
        copyright: wire.copyright.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty()),
    })
}
