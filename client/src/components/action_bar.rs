//! Download and share buttons for the loaded entry.
//!
//! DESIGN
//! ======
//! The download button stays visible for entries without an HD image; it
//! simply does nothing, matching `astropic::download`.

use astropic::{ApodRecord, ShareChannel, download, share_via};
use leptos::prelude::*;

use crate::util::browser::TabOpener;

#[component]
pub fn ActionBar(record: ApodRecord) -> impl IntoView {
    let record = StoredValue::new(record);
    let has_hd = record.with_value(|r| r.hd_url.is_some());

    let on_download = move |_| {
        record.with_value(|r| {
            download(r, &mut TabOpener);
        });
    };

    let share_button = move |channel: ShareChannel| {
        let on_click = move |_| record.with_value(|r| share_via(channel, r, &mut TabOpener));
        view! {
            <button
                class="action-bar__share"
                class:action-bar__share--x=channel == ShareChannel::X
                class:action-bar__share--whatsapp=channel == ShareChannel::WhatsApp
                on:click=on_click
            >
                {channel.label()}
            </button>
        }
    };

    view! {
        <div class="action-bar">
            <button
                class="action-bar__download"
                class:action-bar__download--unavailable=!has_hd
                title=if has_hd { "Open the high-resolution image" } else { "No HD image for this entry" }
                on:click=on_download
            >
                "Download HD Image"
            </button>
            {share_button(ShareChannel::X)}
            {share_button(ShareChannel::WhatsApp)}
        </div>
    }
}
