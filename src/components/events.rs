//! Event Listings (public)
//!
//! Upcoming and past events share one list body; the split is a date
//! classification against now at fetch time. Upcoming lists soonest
//! first, past lists most recent first.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{SocietyEvent, EVENT_CATEGORIES};

fn events_config(upcoming: bool) -> ListConfig<SocietyEvent> {
    ListConfig {
        record_id: |e| e.id.clone(),
        search_text: |e| vec![e.title.clone(), e.venue.clone()],
        category: |e| e.category.clone(),
        sort_value: |e, key| match key {
            "title" => SortValue::Text(e.title.clone()),
            "starts_at" => SortValue::Date(e.starts_at),
            _ => SortValue::Missing,
        },
        categories: EVENT_CATEGORIES,
        default_sort: (
            "starts_at",
            if upcoming {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            },
        ),
        descending_by_default: if upcoming { &[] } else { &["starts_at"] },
        page_size: 10,
    }
}

#[component]
pub fn UpcomingEvents() -> impl IntoView {
    view! { <EventList upcoming=true title="Upcoming Events" /> }
}

#[component]
pub fn PastEvents() -> impl IntoView {
    view! { <EventList upcoming=false title="Past Events" /> }
}

#[component]
fn EventList(upcoming: bool, title: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (controller, set_controller) = signal(ListController::new(events_config(upcoming)));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<SocietyEvent>("events", None).await {
                Ok(items) if seq.is_current(ticket) => {
                    let now = Utc::now();
                    let kept: Vec<SocietyEvent> = items
                        .into_iter()
                        .filter(|e| e.is_upcoming(now) == upcoming)
                        .collect();
                    set_controller.update(|c| c.replace_records(kept));
                }
                Ok(_) => {
                    web_sys::console::log_1(&"[events] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading events", &e),
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
        <div class="page events">
            <h2>{title}</h2>

            <CategoryTabs
                categories=EVENT_CATEGORIES
                current=current_category
                on_select=on_category
            />
            <SearchBar placeholder="Search events..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="event-cards">
                <For
                    each=move || visible.get()
                    key=|e| e.id.clone()
                    children=|event| {
                        view! {
                            <div class="event-card">
                                <div class="event-date">
                                    {event.starts_at.format("%d %b %Y, %H:%M").to_string()}
                                </div>
                                <h3>{event.title.clone()}</h3>
                                <div class="event-venue">{event.venue.clone()}</div>
                                <span class="event-category">{event.category.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No events found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
