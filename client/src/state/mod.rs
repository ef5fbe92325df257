//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The selected date and fetch state live in `astropic::DateSelection`,
//! provided as an `RwSignal` by `App`. Only presentation chrome that the core
//! does not model lives here.

pub mod ui;
