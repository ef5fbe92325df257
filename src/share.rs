//! Share and download actions for a loaded record.
//!
//! Opening a link is the host's job; this module only decides what to open.
//! Both actions go through [`LinkOpener`] so the browser can open a new tab
//! and tests can record what would have been opened.

use crate::record::ApodRecord;

#[cfg(test)]
#[path = "share_test.rs"]
mod tests;

const SHARE_PREFIX: &str = "See this APOD!";

/// Social channels with a share link template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareChannel {
    X,
    WhatsApp,
}

impl ShareChannel {
    fn endpoint(self) -> &'static str {
        match self {
            Self::X => "https://x.com/intent/tweet?text=",
            Self::WhatsApp => "https://api.whatsapp.com/send?text=",
        }
    }

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

/// Opens an external URL on behalf of the core.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

/// Unencoded share text for `record`.
#[must_use]
pub fn share_message(record: &ApodRecord) -> String {
    format!("{SHARE_PREFIX} {} 🌌🚀 {}", record.title, record.url)
}

/// Full share link for `record` on `channel`.
#[must_use]
pub fn share_url(channel: ShareChannel, record: &ApodRecord) -> String {
    format!("{}{}", channel.endpoint(), urlencoding::encode(&share_message(record)))
}

/// Open the share link for `record` on `channel`.
pub fn share_via(channel: ShareChannel, record: &ApodRecord, opener: &mut impl LinkOpener) {
    opener.open(&share_url(channel, record));
}

/// Open the high-resolution image when the record has one.
///
/// Returns `false` without touching `opener` when `hd_url` is absent.
pub fn download(record: &ApodRecord, opener: &mut impl LinkOpener) -> bool {
    match record.hd_url.as_deref() {
        Some(url) => {
            opener.open(url);
            true
        }
        None => {
            tracing::debug!(date = %record.date, "no HD image to download");
            false
        }
    }
}
