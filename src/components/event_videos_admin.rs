//! Event Videos (admin)
//!
//! Video catalogue management: category filter, tag-aware search and
//! delete. Uploads happen elsewhere; this screen only curates.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, DeleteConfirmButton, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{EventVideo, VIDEO_CATEGORIES};
use crate::store::{use_app_store, AppStateStoreFields};

fn videos_config() -> ListConfig<EventVideo> {
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
        page_size: 10,
    }
}

#[component]
pub fn EventVideosAdmin() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (controller, set_controller) = signal(ListController::new(videos_config()));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        let token = ctx.token();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<EventVideo>("videos", token.as_deref()).await {
                Ok(items) if seq.is_current(ticket) => *store.videos().write() = items,
                Ok(_) => {
                    web_sys::console::log_1(&"[videos] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading videos", &e),
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let records = store.videos().get();
        set_controller.update(|c| c.replace_records(records));
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
    let sort_by = move |key: &'static str| set_controller.update(|c| c.set_sort(key));

    let delete_video = move |id: String| {
        let token = ctx.token();
        spawn_local(async move {
            match api::delete("videos", &id, token.as_deref()).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.notify_api_error("Deleting video", &e),
            }
        });
    };

    view! {
        <div class="page event-videos-admin">
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

            <table class="record-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| sort_by("title")>"Title"</th>
                        <th>"Category"</th>
                        <th>"Tags"</th>
                        <th class="sortable" on:click=move |_| sort_by("published_at")>
                            "Published"
                        </th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|v| v.id.clone()
                        children=move |video| {
                            let delete_id = video.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a href=video.video_url.clone() target="_blank">
                                            {video.title.clone()}
                                        </a>
                                    </td>
                                    <td>{video.category.clone()}</td>
                                    <td>{video.tags.join(", ")}</td>
                                    <td>{video.published_at.format("%Y-%m-%d").to_string()}</td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| {
                                                delete_video(delete_id.clone())
                                            })
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No videos found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
