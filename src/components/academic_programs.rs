//! Academic Programs (public)
//!
//! Program catalogue with level tabs and title/description search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{Program, PROGRAM_LEVELS};

fn programs_config() -> ListConfig<Program> {
    ListConfig {
        record_id: |p| p.id.clone(),
        search_text: |p| vec![p.title.clone(), p.description.clone()],
        category: |p| p.level.clone(),
        sort_value: |p, key| match key {
            "title" => SortValue::Text(p.title.clone()),
            _ => SortValue::Missing,
        },
        categories: PROGRAM_LEVELS,
        default_sort: ("title", SortDirection::Ascending),
        descending_by_default: &[],
        page_size: 12,
    }
}

#[component]
pub fn AcademicPrograms() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (controller, set_controller) = signal(ListController::new(programs_config()));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<Program>("programs", None).await {
                Ok(items) if seq.is_current(ticket) => {
                    set_controller.update(|c| c.replace_records(items));
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[programs] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading programs", &e),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| controller.with(|c| c.visible_slice()));
    let page = Memo::new(move |_| controller.with(|c| c.criteria().page));
    let total_pages = Memo::new(move |_| controller.with(|c| c.total_pages()));
    let current_level = Memo::new(move |_| controller.with(|c| c.criteria().category.clone()));
    let filtered_count = Memo::new(move |_| controller.with(|c| c.filtered_count()));

    let on_search = Callback::new(move |term: String| {
        set_controller.update(|c| c.set_search_term(&term));
    });
    let on_level = Callback::new(move |value: String| {
        set_controller.update(|c| c.set_category_filter(&value));
    });
    let on_page = Callback::new(move |n: usize| set_controller.update(|c| c.set_page(n)));

    view! {
        <div class="page academic-programs">
            <h2>"Academic Programs"</h2>

            <CategoryTabs categories=PROGRAM_LEVELS current=current_level on_select=on_level />
            <SearchBar placeholder="Search programs..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="program-cards">
                <For
                    each=move || visible.get()
                    key=|p| p.id.clone()
                    children=|program| {
                        view! {
                            <div class="program-card">
                                <h3>{program.title.clone()}</h3>
                                <span class="program-level">{program.level.clone()}</span>
                                <p>{program.description.clone()}</p>
                            </div>
                        }
                    }
                />
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No programs found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
