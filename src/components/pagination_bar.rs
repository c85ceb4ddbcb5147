//! Pagination Bar Component
//!
//! Prev/next plus numbered page buttons. The controller clamps whatever
//! page it is handed, so the buttons stay dumb.

use leptos::prelude::*;

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when={move || total_pages.get() > 1}>
            <div class="pagination-bar">
                <button
                    class="page-btn"
                    disabled={move || page.get() <= 1}
                    on:click=move |_| on_page.run(page.get().saturating_sub(1))
                >
                    "‹"
                </button>
                {move || {
                    (1..=total_pages.get())
                        .map(|n| {
                            let active = move || page.get() == n;
                            view! {
                                <button
                                    class=move || {
                                        if active() { "page-btn active" } else { "page-btn" }
                                    }
                                    on:click=move |_| on_page.run(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled={move || page.get() >= total_pages.get()}
                    on:click=move |_| on_page.run(page.get() + 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
