//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single page. It owns intent orchestration and delegates
//! rendering details to `components`.

pub mod explorer;
