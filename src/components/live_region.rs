//! Live Region
//!
//! Visually hidden status text read out by screen readers after a change.
//! Each announcement mounts a fresh node so a repeated sentence is read again.

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn LiveRegion() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="sr-only" role="status" aria-live="polite" aria-atomic="true">
            {move || {
                store.announcement().get().map(|a| view! { <span data-seq=a.seq.to_string()>{a.text}</span> })
            }}
        </div>
    }
}
