//! Contact Inbox (admin)
//!
//! Contact-form submissions with status tabs, free-text search, stat
//! cards, status transitions and delete. The canonical collection lives
//! in the global store and is re-fetched wholesale after every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{
    CategoryTabs, DeleteConfirmButton, PaginationBar, SearchBar, StatCards,
};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{
    ContactMessage, ContactStats, ContactStatus, StatusPayload, CONTACT_STATUSES,
};
use crate::store::{use_app_store, AppStateStoreFields};

fn inbox_config() -> ListConfig<ContactMessage> {
    ListConfig {
        record_id: |m| m.id.clone(),
        search_text: |m| {
            vec![
                m.name.clone(),
                m.email.clone(),
                m.subject.clone(),
                m.message.clone(),
            ]
        },
        category: |m| m.status.as_str().to_string(),
        sort_value: |m, key| match key {
            "name" => SortValue::Text(m.name.clone()),
            "created_at" => SortValue::Date(m.created_at),
            _ => SortValue::Missing,
        },
        categories: CONTACT_STATUSES,
        default_sort: ("created_at", SortDirection::Descending),
        descending_by_default: &["created_at"],
        page_size: 10,
    }
}

#[component]
pub fn ContactInbox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (controller, set_controller) = signal(ListController::new(inbox_config()));
    let (stats, set_stats) = signal::<Option<ContactStats>>(None);
    let (selected, set_selected) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    // Re-fetch the working set (and the server-side stats) on mount and
    // after every mutation.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        let token = ctx.token();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<ContactMessage>("contact", token.as_deref()).await {
                Ok(items) if seq.is_current(ticket) => *store.contacts().write() = items,
                Ok(_) => {
                    web_sys::console::log_1(&"[inbox] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading messages", &e),
            }
            set_loading.set(false);
        });
        let token = ctx.token();
        spawn_local(async move {
            match api::fetch_contact_stats(token.as_deref()).await {
                Ok(s) => set_stats.set(Some(s)),
                Err(e) => {
                    // Fall back to client-side aggregates.
                    web_sys::console::log_1(&format!("[inbox] stats fetch failed: {e}").into());
                    set_stats.set(None);
                }
            }
        });
    });

    // Mirror the store into the controller; clear a selection whose
    // message is gone after the refresh.
    Effect::new(move |_| {
        let records = store.contacts().get();
        set_controller.update(|c| c.replace_records(records));
        let kept = controller.with_untracked(|c| c.retain_selection(selected.get_untracked()));
        set_selected.set(kept);
    });

    let visible = Memo::new(move |_| controller.with(|c| c.visible_slice()));
    let page = Memo::new(move |_| controller.with(|c| c.criteria().page));
    let total_pages = Memo::new(move |_| controller.with(|c| c.total_pages()));
    let current_status = Memo::new(move |_| controller.with(|c| c.criteria().category.clone()));
    let filtered_count = Memo::new(move |_| controller.with(|c| c.filtered_count()));

    // Server stats when available, client-side aggregates otherwise.
    let cards = Memo::new(move |_| match stats.get() {
        Some(s) => vec![
            ("Total".to_string(), s.total),
            ("Unread".to_string(), s.unread),
            ("Read".to_string(), s.read),
            ("Replied".to_string(), s.replied),
            ("Archived".to_string(), s.archived),
        ],
        None => {
            let counts = controller.with(|c| c.aggregate_counts());
            let mut cards = vec![("Total".to_string(), counts.total as u64)];
            cards.extend(
                CONTACT_STATUSES
                    .iter()
                    .map(|&(value, label)| (label.to_string(), counts.count(value) as u64)),
            );
            cards
        }
    });

    let detail = Memo::new(move |_| {
        let id = selected.get()?;
        controller.with(|c| c.records().iter().find(|m| m.id == id).cloned())
    });

    let on_search = Callback::new(move |term: String| {
        set_controller.update(|c| c.set_search_term(&term));
    });
    let on_status_tab = Callback::new(move |value: String| {
        set_controller.update(|c| c.set_category_filter(&value));
    });
    let on_page = Callback::new(move |n: usize| set_controller.update(|c| c.set_page(n)));
    let sort_by = move |key: &'static str| set_controller.update(|c| c.set_sort(key));

    let advance_status = move |id: String, to: ContactStatus| {
        let token = ctx.token();
        spawn_local(async move {
            match api::update::<ContactMessage, _>(
                "contact",
                &id,
                &StatusPayload { status: to },
                token.as_deref(),
            )
            .await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.notify_api_error("Updating status", &e),
            }
        });
    };

    let delete_message = move |id: String| {
        let token = ctx.token();
        spawn_local(async move {
            match api::delete("contact", &id, token.as_deref()).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.notify_api_error("Deleting message", &e),
            }
        });
    };

    view! {
        <div class="page contact-inbox">
            <h2>"Contact Messages"</h2>

            <StatCards cards=cards />

            <CategoryTabs
                categories=CONTACT_STATUSES
                current=current_status
                on_select=on_status_tab
            />
            <SearchBar placeholder="Search name, email, subject..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="inbox-layout">
                <table class="record-table">
                    <thead>
                        <tr>
                            <th class="sortable" on:click=move |_| sort_by("name")>"From"</th>
                            <th>"Subject"</th>
                            <th>"Status"</th>
                            <th class="sortable" on:click=move |_| sort_by("created_at")>
                                "Received"
                            </th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|m| (m.id.clone(), m.status)
                            children=move |message| {
                                let id = message.id.clone();
                                let row_id = id.clone();
                                let delete_id = id.clone();
                                let next = message.status.next();
                                let status = message.status;
                                view! {
                                    <tr
                                        class:unread-row={status == ContactStatus::Unread}
                                        on:click=move |_| set_selected.set(Some(row_id.clone()))
                                    >
                                        <td>{message.name.clone()} <br /> <small>{message.email.clone()}</small></td>
                                        <td>{message.subject.clone()}</td>
                                        <td>
                                            <span class=format!("status-badge {}", status.as_str())>
                                                {status.label()}
                                            </span>
                                        </td>
                                        <td>{message.created_at.format("%Y-%m-%d %H:%M").to_string()}</td>
                                        <td>
                                            {next.map(|to| {
                                                let advance_id = id.clone();
                                                view! {
                                                    <button
                                                        class="status-advance-btn"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            advance_status(advance_id.clone(), to);
                                                        }
                                                    >
                                                        {format!("Mark {}", to.label().to_lowercase())}
                                                    </button>
                                                }
                                            })}
                                            <DeleteConfirmButton
                                                button_class="delete-btn"
                                                on_confirm=Callback::new(move |_| {
                                                    delete_message(delete_id.clone())
                                                })
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <Show when=move || detail.get().is_some()>
                    {move || {
                        detail
                            .get()
                            .map(|message| {
                                view! {
                                    <aside class="detail-pane">
                                        <header>
                                            <h3>{message.subject.clone()}</h3>
                                            <button
                                                class="close-btn"
                                                on:click=move |_| set_selected.set(None)
                                            >
                                                "×"
                                            </button>
                                        </header>
                                        <p class="detail-meta">
                                            {message.name.clone()} " <" {message.email.clone()} ">"
                                        </p>
                                        <p class="detail-body">{message.message.clone()}</p>
                                    </aside>
                                }
                            })
                    }}
                </Show>
            </div>

            <Show when={move || !loading.get() && filtered_count.get() == 0}>
                <div class="empty-state">"No messages found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
