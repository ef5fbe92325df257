use super::*;

#[test]
fn ui_state_default_theme_is_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn light_theme_offers_moon_and_dark_switch() {
    let state = UiState { theme: Theme::Light };
    assert_eq!(state.toggle_glyph(), "\u{263E}");
    assert_eq!(state.toggle_label(), "Switch to dark theme");
}

#[test]
fn dark_theme_offers_sun_and_light_switch() {
    let state = UiState { theme: Theme::Dark };
    assert_eq!(state.toggle_glyph(), "\u{2600}");
    assert_eq!(state.toggle_label(), "Switch to light theme");
}
