//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the loaded entry, reading shared
//! state from Leptos context providers or props.

pub mod action_bar;
pub mod apod_view;
pub mod banner;
pub mod date_picker;
