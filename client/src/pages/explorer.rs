//! The single APOD explorer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page turns user intents (date picked, random requested) into
//! `DateSelection` transitions and spawns the fetch each transition asks
//! for. Settlements are fed back through `DateSelection::apply`, which drops
//! any that a later intent has superseded.

use astropic::{ApodConfig, CalendarDate, Clock, DateSelection, FetchError, FetchState, FetchTicket};
use leptos::prelude::*;
use time::Date;

use crate::components::action_bar::ActionBar;
use crate::components::apod_view::ApodView;
use crate::components::banner::Banner;
use crate::components::date_picker::DatePicker;
use crate::util::browser::{BrowserClock, intent_rng};

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

/// Start the fetch for `ticket` and settle `selection` when it completes.
pub fn dispatch_fetch(selection: RwSignal<DateSelection>, config: ApodConfig, ticket: FetchTicket) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let source = crate::net::api::GlooSource::new(config);
        let settlement = astropic::fetch_ticket(&source, ticket).await;
        if let Err(err) = &settlement.result {
            leptos::logging::warn!("APOD fetch for {} failed: {err}", ticket.date());
        }
        selection.update(|s| {
            s.apply(settlement);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (selection, config, ticket);
    }
}

/// What the date input should do after the user commits a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateInput {
    /// The value was accepted and this fetch was issued.
    Fetch(FetchTicket),
    /// The value was rejected; the input must show this date again.
    Revert(CalendarDate),
}

/// Apply a raw date-input value to `selection`.
///
/// Rejected text leaves the selection and any in-flight fetch untouched.
pub fn read_date_input(selection: &mut DateSelection, raw: &str, today: Date) -> DateInput {
    match CalendarDate::parse(raw, today) {
        Ok(date) => DateInput::Fetch(selection.set_date(date)),
        Err(err) => {
            leptos::logging::warn!("ignoring date input: {err}");
            DateInput::Revert(selection.date())
        }
    }
}

/// User-facing text for a failed fetch.
pub fn failure_message(err: &FetchError) -> String {
    match err {
        FetchError::Unreachable(_) => "Couldn't reach NASA. Check your connection and try again.".to_owned(),
        FetchError::RemoteRejected(429) => "NASA is rate limiting requests. Try again in a moment.".to_owned(),
        FetchError::RemoteRejected(status) => format!("NASA couldn't provide this picture (HTTP {status})."),
        FetchError::MalformedResponse(_) => "NASA sent a response this page doesn't understand.".to_owned(),
    }
}

/// Upper bound for the date input, formatted as `YYYY-MM-DD`.
pub fn max_selectable(clock: &impl Clock) -> String {
    let today = clock.today();
    CalendarDate::new(today, today)
        .unwrap_or_else(|_| CalendarDate::archive_start())
        .to_string()
}

/// Explorer page: banner, date controls, and the current entry.
#[component]
pub fn ExplorerPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<DateSelection>>();
    let config = expect_context::<ApodConfig>();

    let on_date_change = Callback::new({
        let config = config.clone();
        move |raw: String| {
            let today = BrowserClock.today();
            match selection.try_update_untracked(|s| read_date_input(s, &raw, today)) {
                Some(DateInput::Fetch(ticket)) => {
                    selection.notify();
                    dispatch_fetch(selection, config.clone(), ticket);
                }
                // Re-run `selected` so the input snaps back to the kept date.
                Some(DateInput::Revert(_)) => selection.notify(),
                None => {}
            }
        }
    });

    let on_random = move |_| {
        let mut rng = intent_rng();
        if let Some(ticket) = selection.try_update(|s| s.request_random_date(&BrowserClock, &mut rng)) {
            dispatch_fetch(selection, config.clone(), ticket);
        }
    };

    let selected = Signal::derive(move || selection.with(|s| s.date().to_string()));

    view! {
        <div class="explorer">
            <Banner/>
            <main class="explorer__content">
                <p class="explorer__notice">"Starting only after June 16, 1995 ! 😉"</p>
                <section class="explorer__card">
                    <div class="explorer__controls">
                        <DatePicker
                            value=selected
                            max=max_selectable(&BrowserClock)
                            on_change=on_date_change
                        />
                        <button class="explorer__random" on:click=on_random>
                            "See Random APOD"
                        </button>
                    </div>
                    {move || match selection.with(|s| s.state().clone()) {
                        FetchState::Idle | FetchState::Loading => {
                            view! { <p class="explorer__status">"Loading Image..."</p> }.into_any()
                        }
                        FetchState::Failed(err) => {
                            view! {
                                <p class="explorer__status explorer__status--error" title=err.to_string()>
                                    {failure_message(&err)}
                                </p>
                            }
                                .into_any()
                        }
                        FetchState::Loaded(record) => {
                            view! {
                                <div class="explorer__entry">
                                    <ApodView record=record.clone()/>
                                    <ActionBar record=record/>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
