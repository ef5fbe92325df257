//! Networking for the APOD remote source.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements `astropic::ApodSource` over the browser's `fetch`.

pub mod api;
