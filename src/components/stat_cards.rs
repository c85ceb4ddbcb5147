//! Stat Cards Component
//!
//! Summary counts over the full collection. These stay put while the
//! user searches or filters the list below them.

use leptos::prelude::*;

#[component]
pub fn StatCards(#[prop(into)] cards: Signal<Vec<(String, u64)>>) -> impl IntoView {
    view! {
        <div class="stat-cards">
            <For
                each=move || cards.get()
                key=|(label, count)| (label.clone(), *count)
                children=|(label, count)| {
                    view! {
                        <div class="stat-card">
                            <div class="stat-count">{count}</div>
                            <div class="stat-label">{label}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
