//! Search Bar Component
//!
//! Debounced free-text search input. The debounce keeps fast typing from
//! recomputing (and, on admin screens, re-fetching) per keystroke.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 250;

#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_search: Callback<String>,
) -> impl IntoView {
    // Each keystroke invalidates the pending debounce tick.
    let generation = StoredValue::new(0u64);

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        let this = generation.with_value(|g| *g) + 1;
        generation.set_value(this);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.with_value(|g| *g) == this {
                on_search.run(value);
            }
        });
    };

    view! {
        <input
            class="search-input"
            type="search"
            placeholder=placeholder
            on:input=on_input
        />
    }
}
