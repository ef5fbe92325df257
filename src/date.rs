//! Archive-bounded calendar dates and the clock seam.
//!
//! DESIGN
//! ======
//! A `CalendarDate` can only be built through a range check against a
//! caller-supplied "today", so every value handed to the state machine or the
//! fetch client already satisfies `1995-06-16 <= date <= today`. "Today"
//! comes from a [`Clock`] so tests and the browser can supply their own time
//! source.

use std::fmt;

use time::macros::{date, format_description};
use time::{Date, OffsetDateTime};

use crate::error::DateError;

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;

/// First day with an APOD entry.
pub const ARCHIVE_START: Date = date!(1995 - 06 - 16);

/// A date within the APOD archive, rendered as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// The first archive entry, 1995-06-16.
    #[must_use]
    pub fn archive_start() -> Self {
        Self(ARCHIVE_START)
    }

    /// Wrap `date` after checking it against the archive range ending `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::BeforeArchive`] or [`DateError::InFuture`] when
    /// `date` falls outside `[1995-06-16, today]`.
    pub fn new(date: Date, today: Date) -> Result<Self, DateError> {
        let candidate = Self(date);
        if date < ARCHIVE_START {
            return Err(DateError::BeforeArchive(candidate.to_string()));
        }
        if date > today {
            return Err(DateError::InFuture(candidate.to_string()));
        }
        Ok(candidate)
    }

    /// Parse an ISO-8601 `YYYY-MM-DD` string and range-check it.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Invalid`] for text that is not a valid Gregorian
    /// date, otherwise the range errors of [`CalendarDate::new`].
    pub fn parse(raw: &str, today: Date) -> Result<Self, DateError> {
        let trimmed = raw.trim();
        // `[year]` also takes a leading sign; only bare four-digit years are canonical.
        if trimmed.len() != 10 || !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(DateError::Invalid(trimmed.to_owned()));
        }
        let date = Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
            .map_err(|_| DateError::Invalid(trimmed.to_owned()))?;
        Self::new(date, today)
    }

    /// Wrap a date the caller has already confined to the archive range.
    pub(crate) fn from_bounded(date: Date) -> Self {
        debug_assert!(date >= ARCHIVE_START);
        Self(date)
    }

    /// The underlying `time::Date`.
    #[must_use]
    pub fn as_date(self) -> Date {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

/// Source of the current instant.
///
/// The offset of the returned value is treated as the user's local offset:
/// "today" and random-date sampling are computed in it.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;

    /// Today's date in the clock's offset.
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Clock backed by the host's system time, in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
