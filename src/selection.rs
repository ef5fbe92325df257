//! Date-selection state machine.
//!
//! DESIGN
//! ======
//! `DateSelection` owns the selected date and the displayed `FetchState`.
//! Every date change (including reselecting the current date) enters
//! `Loading` and hands out a `FetchTicket` stamped with a monotonically
//! increasing sequence number. Only the most recently issued ticket may
//! settle the machine; results for superseded tickets are dropped whenever
//! they arrive. That comparison is the implicit cancellation for requests the
//! host has no way to abort.
//!
//! The machine never performs I/O itself. The owner takes the ticket, runs
//! [`fetch_ticket`] against an [`ApodSource`], and feeds the resulting
//! [`Settlement`] back through [`DateSelection::apply`].

use rand::Rng;

use crate::date::{CalendarDate, Clock};
use crate::error::FetchError;
use crate::random::random_date;
use crate::record::ApodRecord;
use crate::source::ApodSource;

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;

/// What the presentation surface should currently show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    Loading,
    Loaded(ApodRecord),
    Failed(FetchError),
}

impl FetchState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&ApodRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// The failure reason, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Handle for one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    date: CalendarDate,
}

impl FetchTicket {
    /// The date this fetch was issued for.
    #[must_use]
    pub fn date(self) -> CalendarDate {
        self.date
    }

    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// A completed fetch, ready to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub ticket: FetchTicket,
    pub result: Result<ApodRecord, FetchError>,
}

/// Selected date plus the state of its fetch.
#[derive(Clone, Debug)]
pub struct DateSelection {
    date: CalendarDate,
    state: FetchState,
    /// Sequence number of the most recently issued ticket; 0 before any.
    issued: u64,
}

impl Default for DateSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl DateSelection {
    /// Idle machine positioned on the first archive date.
    #[must_use]
    pub fn new() -> Self {
        Self { date: CalendarDate::archive_start(), state: FetchState::Idle, issued: 0 }
    }

    /// Initial session state: first archive date, `Loading`, with the ticket
    /// for the fetch the caller must start immediately.
    #[must_use]
    pub fn start() -> (Self, FetchTicket) {
        let mut selection = Self::new();
        let ticket = selection.set_date(CalendarDate::archive_start());
        (selection, ticket)
    }

    #[must_use]
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    #[must_use]
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Select `date` and begin a fresh fetch cycle.
    ///
    /// Always re-fetches, even when `date` is already selected. Any ticket
    /// issued earlier becomes stale.
    pub fn set_date(&mut self, date: CalendarDate) -> FetchTicket {
        self.issued += 1;
        self.date = date;
        self.state = FetchState::Loading;
        tracing::debug!(seq = self.issued, %date, "fetch issued");
        FetchTicket { seq: self.issued, date }
    }

    /// Select a random archive date and begin a fetch for it.
    pub fn request_random_date(&mut self, clock: &impl Clock, rng: &mut impl Rng) -> FetchTicket {
        let date = random_date(clock.now(), rng);
        self.set_date(date)
    }

    /// Apply a fetch result if `ticket` is still current.
    ///
    /// Returns `false` (and leaves the state untouched) for superseded
    /// tickets.
    pub fn on_fetch_settled(&mut self, ticket: FetchTicket, result: Result<ApodRecord, FetchError>) -> bool {
        if ticket.seq != self.issued || ticket.date != self.date {
            tracing::debug!(
                seq = ticket.seq,
                current = self.issued,
                date = %ticket.date,
                "discarding stale fetch result"
            );
            return false;
        }

        self.state = match result {
            Ok(record) => FetchState::Loaded(record),
            Err(err) => {
                tracing::debug!(date = %ticket.date, code = err.error_code(), "fetch failed");
                FetchState::Failed(err)
            }
        };
        true
    }

    /// Apply a [`Settlement`] produced by [`fetch_ticket`].
    pub fn apply(&mut self, settlement: Settlement) -> bool {
        self.on_fetch_settled(settlement.ticket, settlement.result)
    }
}

/// Run the fetch a ticket stands for.
pub async fn fetch_ticket<S: ApodSource + ?Sized>(source: &S, ticket: FetchTicket) -> Settlement {
    let result = source.fetch(ticket.date).await;
    Settlement { ticket, result }
}
