//! Category Tabs Component
//!
//! Tab row over a closed category list, with the "all" sentinel tab
//! prepended. Selecting a tab replaces the controller's category filter.

use leptos::prelude::*;

use crate::list_view::ALL_CATEGORIES;

#[component]
pub fn CategoryTabs(
    categories: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let tab = move |value: &'static str, label: &'static str| {
        let is_active = move || current.get() == value;
        view! {
            <button
                class=move || if is_active() { "category-tab active" } else { "category-tab" }
                on:click=move |_| on_select.run(value.to_string())
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="category-tabs">
            {tab(ALL_CATEGORIES, "All")}
            {categories
                .iter()
                .map(|&(value, label)| tab(value, label))
                .collect_view()}
        </div>
    }
}
