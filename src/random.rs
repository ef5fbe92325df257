//! Random archive date sampling.
//!
//! Samples uniformly by elapsed time between 1995-06-16 00:00 and `now`, both
//! in `now`'s offset, then takes the calendar date in that same offset. Months
//! with more days are slightly more likely; that bias is accepted.

use rand::Rng;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, Time};

use crate::date::{ARCHIVE_START, CalendarDate};

#[cfg(test)]
#[path = "random_test.rs"]
mod tests;

/// Pick a date in `[1995-06-16, now.date()]`.
///
/// A `now` earlier than the archive start (a badly skewed clock) yields the
/// archive start.
pub fn random_date(now: OffsetDateTime, rng: &mut impl Rng) -> CalendarDate {
    let start = PrimitiveDateTime::new(ARCHIVE_START, Time::MIDNIGHT).assume_offset(now.offset());

    let span_ms = i64::try_from((now - start).whole_milliseconds()).unwrap_or(i64::MAX);
    if span_ms <= 0 {
        return CalendarDate::archive_start();
    }

    let offset_ms = rng.random_range(0..=span_ms);
    let picked = start
        .checked_add(Duration::milliseconds(offset_ms))
        .map_or(now.date(), OffsetDateTime::date);
    CalendarDate::from_bounded(picked.clamp(ARCHIVE_START, now.date()))
}
