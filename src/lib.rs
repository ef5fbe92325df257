//! # astropic
//!
//! Platform-independent core for the AstroPic APOD browser.
//!
//! DESIGN
//! ======
//! The browser client (`client/`) is a thin rendering surface. Everything with
//! behavior worth testing lives here and compiles natively:
//!
//! - `date`: archive-bounded calendar dates and the clock seam.
//! - `record` / `error`: the normalized APOD record, wire parsing, and the
//!   fetch failure taxonomy.
//! - `source`: the async fetch seam implemented by the browser HTTP client.
//! - `selection`: the date-selection state machine with stale-response
//!   suppression.
//! - `random`: elapsed-time random date sampling.
//! - `theme` / `share`: preference persistence and outbound links over
//!   injected host capabilities.
//! - `config`: endpoint, credential, and timeout settings.

pub mod config;
pub mod date;
pub mod error;
pub mod random;
pub mod record;
pub mod selection;
pub mod share;
pub mod source;
pub mod theme;

pub use config::ApodConfig;
pub use date::{ARCHIVE_START, CalendarDate, Clock, FixedClock, SystemClock};
pub use error::{DateError, FetchError};
pub use random::random_date;
pub use record::{ApodRecord, MediaType, parse_response};
pub use selection::{DateSelection, FetchState, FetchTicket, Settlement, fetch_ticket};
pub use share::{LinkOpener, ShareChannel, download, share_url, share_via};
pub use source::ApodSource;
pub use theme::{MemoryStore, THEME_KEY, Theme, ThemeStore, load_theme, toggle_theme};
