//! Research Projects (public)
//!
//! Research initiatives with area tabs and title/summary/lead search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{ResearchProject, RESEARCH_AREAS};

fn research_config() -> ListConfig<ResearchProject> {
    ListConfig {
        record_id: |p| p.id.clone(),
        search_text: |p| vec![p.title.clone(), p.summary.clone(), p.lead.clone()],
        category: |p| p.area.clone(),
        sort_value: |p, key| match key {
            "title" => SortValue::Text(p.title.clone()),
            _ => SortValue::Missing,
        },
        categories: RESEARCH_AREAS,
        default_sort: ("title", SortDirection::Ascending),
        descending_by_default: &[],
        page_size: 12,
    }
}

#[component]
pub fn ResearchProjects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (controller, set_controller) = signal(ListController::new(research_config()));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<ResearchProject>("research", None).await {
                Ok(items) if seq.is_current(ticket) => {
                    set_controller.update(|c| c.replace_records(items));
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[research] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading research projects", &e),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| controller.with(|c| c.visible_slice()));
    let page = Memo::new(move |_| controller.with(|c| c.criteria().page));
    let total_pages = Memo::new(move |_| controller.with(|c| c.total_pages()));
    let current_area = Memo::new(move |_| controller.with(|c| c.criteria().category.clone()));
    let filtered_count = Memo::new(move |_| controller.with(|c| c.filtered_count()));

    let on_search = Callback::new(move |term: String| {
        set_controller.update(|c| c.set_search_term(&term));
    });
    let on_area = Callback::new(move |value: String| {
        set_controller.update(|c| c.set_category_filter(&value));
    });
    let on_page = Callback::new(move |n: usize| set_controller.update(|c| c.set_page(n)));

    view! {
        <div class="page research-projects">
            <h2>"Research"</h2>

            <CategoryTabs categories=RESEARCH_AREAS current=current_area on_select=on_area />
            <SearchBar placeholder="Search research projects..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="research-cards">
                <For
                    each=move || visible.get()
                    key=|p| p.id.clone()
                    children=|project| {
                        view! {
                            <div class="research-card">
                                <h3>{project.title.clone()}</h3>
                                <span class="research-area">{project.area.clone()}</span>
                                <p>{project.summary.clone()}</p>
                                <small>"Lead: " {project.lead.clone()}</small>
                            </div>
                        }
                    }
                />
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No research projects found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
