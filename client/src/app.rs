//! Root application component and context providers.

use astropic::{ApodConfig, DateSelection};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::explorer::{ExplorerPage, dispatch_fetch};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared selection/UI state and starts the first fetch for the
/// opening date.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = dark_mode::read_preference();
    dark_mode::apply(theme);

    let ui = RwSignal::new(UiState { theme });
    let (initial, ticket) = DateSelection::start();
    let selection = RwSignal::new(initial);
    let config = ApodConfig::from_build_env();

    provide_context(ui);
    provide_context(selection);
    provide_context(config.clone());

    dispatch_fetch(selection, config, ticket);

    view! {
        <Title text="AstroPic"/>
        <ExplorerPage/>
    }
}
