//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Theme is an independent axis from the APOD fetch state, so it gets its own
//! signal and components that only restyle do not re-render on fetches.

use astropic::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    /// Glyph for the theme toggle button: the sun switches back to light.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        if self.theme.is_dark() { "\u{2600}" } else { "\u{263E}" }
    }

    /// Accessible label for the theme toggle button.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.theme.is_dark() {
            "Switch to light theme"
        } else {
            "Switch to dark theme"
        }
    }
}
