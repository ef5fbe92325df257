//! Rendering of a single loaded APOD entry.

use astropic::{ApodRecord, MediaType};
use leptos::prelude::*;

/// Title, media, explanation, and credit for one entry.
#[component]
pub fn ApodView(record: ApodRecord) -> impl IntoView {
    let ApodRecord { title, explanation, url, media_type, date, copyright, .. } = record;

    let media = match media_type {
        MediaType::Image => view! { <img class="apod__image" src=url alt=title.clone()/> }.into_any(),
        MediaType::Video => view! {
            <iframe class="apod__video" src=url title=title.clone() allowfullscreen=true></iframe>
        }
        .into_any(),
    };

    view! {
        <article class="apod">
            <h2 class="apod__title">{title}</h2>
            <p class="apod__date">{date.to_string()}</p>
            {media}
            <p class="apod__explanation">{explanation}</p>
            {copyright.map(|who| view! { <p class="apod__copyright">"© " {who}</p> })}
        </article>
    }
}
