//! Browser implementations of the core's clock, link-opener, and entropy
//! needs.
//!
//! Native builds fall back to the system clock, a logging opener, and
//! time-seeded randomness so pages stay renderable in tests.

use astropic::{Clock, LinkOpener};
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{OffsetDateTime, UtcOffset};

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Clock reading `Date.now()` in the browser's local offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> OffsetDateTime {
        #[cfg(feature = "csr")]
        {
            let js_now = js_sys::Date::new_0();
            let offset = offset_from_js_minutes(js_now.get_timezone_offset());
            instant_from_js_millis(js_now.get_time(), offset)
        }
        #[cfg(not(feature = "csr"))]
        {
            astropic::SystemClock.now()
        }
    }
}

/// Convert `Date.getTimezoneOffset()` (minutes, positive west of UTC) into
/// a `UtcOffset`.
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    let seconds = -(minutes.round() as i32) * 60;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// Convert epoch milliseconds into an instant viewed in `offset`.
#[allow(clippy::cast_possible_truncation)]
pub fn instant_from_js_millis(millis: f64, offset: UtcOffset) -> OffsetDateTime {
    let nanos = i128::from(millis as i64) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .map_or(OffsetDateTime::UNIX_EPOCH, |t| t.to_offset(offset))
}

/// Opens links in a new browser tab.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabOpener;

impl LinkOpener for TabOpener {
    fn open(&mut self, url: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                leptos::logging::warn!("failed to open {url}: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("open link: {url}");
        }
    }
}

/// Fresh RNG for one random-date request.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn intent_rng() -> StdRng {
    #[cfg(feature = "csr")]
    let seed = {
        let entropy = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        entropy ^ (js_sys::Date::now() as u64).rotate_left(32)
    };
    #[cfg(not(feature = "csr"))]
    let seed = OffsetDateTime::now_utc().unix_timestamp_nanos() as u64;
    StdRng::seed_from_u64(seed)
}
