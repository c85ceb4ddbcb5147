//! Event Videos (public)
//!
//! Published recordings, filterable by category with tag-aware search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{EventVideo, VIDEO_CATEGORIES};

fn gallery_config() -> ListConfig<EventVideo> {
    ListConfig {
        record_id: |v| v.id.clone(),
        search_text: |v| {
            let mut fields = vec![v.title.clone(), v.description.clone()];
            fields.extend(v.tags.iter().cloned());
            fields
        },
        category: |v| v.category.clone(),
        sort_value: |v, key| match key {
            "title" => SortValue::Text(v.title.clone()),
            "published_at" => SortValue::Date(v.published_at),
            _ => SortValue::Missing,
        },
        categories: VIDEO_CATEGORIES,
        default_sort: ("published_at", SortDirection::Descending),
        descending_by_default: &["published_at"],
        page_size: 9,
    }
}

#[component]
pub fn EventVideosGallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (controller, set_controller) = signal(ListController::new(gallery_config()));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<EventVideo>("videos", None).await {
                Ok(items) if seq.is_current(ticket) => {
                    set_controller.update(|c| c.replace_records(items));
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[videos] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading videos", &e),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| controller.with(|c| c.visible_slice()));
    let page = Memo::new(move |_| controller.with(|c| c.criteria().page));
    let total_pages = Memo::new(move |_| controller.with(|c| c.total_pages()));
    let current_category =
        Memo::new(move |_| controller.with(|c| c.criteria().category.clone()));
    let filtered_count = Memo::new(move |_| controller.with(|c| c.filtered_count()));

    let on_search = Callback::new(move |term: String| {
        set_controller.update(|c| c.set_search_term(&term));
    });
    let on_category = Callback::new(move |value: String| {
        set_controller.update(|c| c.set_category_filter(&value));
    });
    let on_page = Callback::new(move |n: usize| set_controller.update(|c| c.set_page(n)));

    view! {
        <div class="page event-videos">
            <h2>"Event Videos"</h2>

            <CategoryTabs
                categories=VIDEO_CATEGORIES
                current=current_category
                on_select=on_category
            />
            <SearchBar placeholder="Search title, description, tags..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="video-cards">
                <For
                    each=move || visible.get()
                    key=|v| v.id.clone()
                    children=|video| {
                        view! {
                            <div class="video-card">
                                <a href=video.video_url.clone() target="_blank">
                                    <h3>{video.title.clone()}</h3>
                                </a>
                                <p class="video-description">{video.description.clone()}</p>
                                <div class="video-tags">
                                    {video
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! { <span class="tag-chip">{tag.clone()}</span> }
                                        })
                                        .collect_view()}
                                </div>
                                <small>
                                    {video.published_at.format("%d %b %Y").to_string()}
                                </small>
                            </div>
                        }
                    }
                />
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No videos found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
