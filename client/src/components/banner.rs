//! Page banner with the app title and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Banner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|s| s.theme = dark_mode::toggle(s.theme));
    };

    view! {
        <header class="banner">
            <div class="banner__text">
                <h1 class="banner__title">"AstroPic"</h1>
                <p class="banner__tagline">"Explore APOD by date and see the APOD of your birth date"</p>
            </div>
            <button
                class="banner__theme-toggle"
                on:click=on_toggle
                title=move || ui.get().toggle_label()
                aria-label=move || ui.get().toggle_label()
            >
                {move || ui.get().toggle_glyph()}
            </button>
        </header>
    }
}
