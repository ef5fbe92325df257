//! # astropic-client
//!
//! Leptos + WASM frontend for browsing NASA's Astronomy Picture of the Day.
//!
//! This crate is the rendering surface only: it holds the `astropic` state
//! machine in a reactive signal, raises user intents into it, and supplies the
//! browser-side implementations of the core's seams (HTTP, storage, clock,
//! link opening). Browser calls are gated behind the `csr` feature so the
//! crate also builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
