//! Image Gallery (public)
//!
//! Paginated photo grid with category tabs and caption search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{GalleryImage, GALLERY_CATEGORIES};

fn gallery_config() -> ListConfig<GalleryImage> {
    ListConfig {
        record_id: |i| i.id.clone(),
        search_text: |i| vec![i.caption.clone(), i.category.clone()],
        category: |i| i.category.clone(),
        sort_value: |i, key| match key {
            "caption" => SortValue::Text(i.caption.clone()),
            "taken_at" => SortValue::Date(i.taken_at),
            _ => SortValue::Missing,
        },
        categories: GALLERY_CATEGORIES,
        default_sort: ("taken_at", SortDirection::Descending),
        descending_by_default: &["taken_at"],
        page_size: 12,
    }
}

#[component]
pub fn ImageGallery() -> impl IntoView {
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
            match api::fetch_all::<GalleryImage>("gallery", None).await {
                Ok(items) if seq.is_current(ticket) => {
                    set_controller.update(|c| c.replace_records(items));
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[gallery] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading gallery", &e),
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
        <div class="page image-gallery">
            <h2>"Photo Gallery"</h2>

            <CategoryTabs
                categories=GALLERY_CATEGORIES
                current=current_category
                on_select=on_category
            />
            <SearchBar placeholder="Search captions..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="gallery-grid">
                <For
                    each=move || visible.get()
                    key=|i| i.id.clone()
                    children=|image| {
                        view! {
                            <figure class="gallery-card">
                                <img src=image.image_url.clone() alt=image.caption.clone() />
                                <figcaption>{image.caption.clone()}</figcaption>
                            </figure>
                        }
                    }
                />
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No photos found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
