//! Date input bounded to the APOD archive.

use leptos::prelude::*;

/// Lower bound of the archive, for the input's `min` attribute.
const ARCHIVE_MIN: &str = "1995-06-16";

/// A native `<input type="date">` reporting raw `YYYY-MM-DD` values.
///
/// The browser enforces `min`/`max` in its picker, but typed values can still
/// escape them; `on_change` receivers must validate.
#[component]
pub fn DatePicker(
    #[prop(into)] value: Signal<String>,
    max: String,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="date-picker">
            <span class="date-picker__label">"Pick a date"</span>
            <input
                class="date-picker__input"
                type="date"
                min=ARCHIVE_MIN
                max=max
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
