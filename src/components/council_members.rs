//! Council Members (admin)
//!
//! Member profiles with role filter, search across name/email and the
//! qualifications list, sortable columns, and create/role-edit/delete
//! through the API. Every mutation ends in a full re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RequestSeq};
use crate::components::{CategoryTabs, DeleteConfirmButton, PaginationBar, SearchBar};
use crate::context::AppContext;
use crate::list_view::{ListConfig, ListController, SortDirection, SortValue};
use crate::models::{CouncilMember, NewCouncilMember, RolePayload, MEMBER_ROLES};
use crate::store::{use_app_store, AppStateStoreFields};

fn members_config() -> ListConfig<CouncilMember> {
    ListConfig {
        record_id: |m| m.id.clone(),
        search_text: |m| {
            let mut fields = vec![m.name.clone(), m.email.clone()];
            fields.extend(m.qualifications.iter().cloned());
            fields
        },
        category: |m| m.role.clone(),
        sort_value: |m, key| match key {
            "name" => SortValue::Text(m.name.clone()),
            "display_order" => SortValue::Number(m.display_order as f64),
            _ => SortValue::Missing,
        },
        categories: MEMBER_ROLES,
        default_sort: ("display_order", SortDirection::Ascending),
        descending_by_default: &[],
        page_size: 10,
    }
}

#[component]
pub fn CouncilMembers() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (controller, set_controller) = signal(ListController::new(members_config()));
    let (loading, set_loading) = signal(false);
    let seq = RequestSeq::new();

    // New-member form state
    let (new_name, set_new_name) = signal(String::new());
    let (new_email, set_new_email) = signal(String::new());
    let (new_role, set_new_role) = signal("member".to_string());
    let (new_quals, set_new_quals) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let ticket = seq.begin();
        let seq = seq.clone();
        let token = ctx.token();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_all::<CouncilMember>("council-members", token.as_deref()).await {
                Ok(items) if seq.is_current(ticket) => *store.members().write() = items,
                Ok(_) => {
                    web_sys::console::log_1(&"[council] discarded stale list response".into())
                }
                Err(e) => ctx.notify_api_error("Loading council members", &e),
            }
            set_loading.set(false);
        });
    });

    Effect::new(move |_| {
        let records = store.members().get();
        set_controller.update(|c| c.replace_records(records));
    });

    let visible = Memo::new(move |_| controller.with(|c| c.visible_slice()));
    let page = Memo::new(move |_| controller.with(|c| c.criteria().page));
    let total_pages = Memo::new(move |_| controller.with(|c| c.total_pages()));
    let current_role = Memo::new(move |_| controller.with(|c| c.criteria().category.clone()));
    let filtered_count = Memo::new(move |_| controller.with(|c| c.filtered_count()));

    let on_search = Callback::new(move |term: String| {
        set_controller.update(|c| c.set_search_term(&term));
    });
    let on_role_tab = Callback::new(move |value: String| {
        set_controller.update(|c| c.set_category_filter(&value));
    });
    let on_page = Callback::new(move |n: usize| set_controller.update(|c| c.set_page(n)));
    let sort_by = move |key: &'static str| set_controller.update(|c| c.set_sort(key));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let email = new_email.get();
        if name.is_empty() || email.is_empty() {
            ctx.notify_error("Name and email are required");
            return;
        }
        let role = new_role.get();
        let qualifications: Vec<String> = new_quals
            .get()
            .split(',')
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string)
            .collect();
        let display_order = store.members().with_untracked(|m| m.len() as i32 + 1);
        let token = ctx.token();
        spawn_local(async move {
            let payload = NewCouncilMember {
                name: &name,
                role: &role,
                email: &email,
                qualifications,
                display_order,
            };
            match api::create::<CouncilMember, _>("council-members", &payload, token.as_deref())
                .await {
                Ok(_) => {
                    ctx.notify_info("Member added");
                    ctx.reload();
                }
                Err(e) => ctx.notify_api_error("Adding member", &e),
            }
        });
        set_new_name.set(String::new());
        set_new_email.set(String::new());
        set_new_quals.set(String::new());
    };

    let change_role = move |id: String, role: String| {
        let token = ctx.token();
        spawn_local(async move {
            match api::update::<CouncilMember, _>(
                "council-members",
                &id,
                &RolePayload { role: &role },
                token.as_deref(),
            )
            .await {
                Ok(_) => ctx.reload(),
                Err(e) => ctx.notify_api_error("Updating role", &e),
            }
        });
    };

    let delete_member = move |id: String| {
        let token = ctx.token();
        spawn_local(async move {
            match api::delete("council-members", &id, token.as_deref()).await {
                Ok(()) => ctx.reload(),
                Err(e) => ctx.notify_api_error("Removing member", &e),
            }
        });
    };

    view! {
        <div class="page council-members">
            <h2>"Council Members"</h2>

            <form class="new-record-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=new_name
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=new_email
                    on:input=move |ev| set_new_email.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_new_role.set(event_target_value(&ev))>
                    {MEMBER_ROLES
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value={*value} selected={*value == "member"}>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Qualifications (comma separated)"
                    prop:value=new_quals
                    on:input=move |ev| set_new_quals.set(event_target_value(&ev))
                />
                <button type="submit">"Add member"</button>
            </form>

            <CategoryTabs categories=MEMBER_ROLES current=current_role on_select=on_role_tab />
            <SearchBar placeholder="Search name, email, qualifications..." on_search=on_search />

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <table class="record-table">
                <thead>
                    <tr>
                        <th class="sortable" on:click=move |_| sort_by("name")>"Name"</th>
                        <th>"Role"</th>
                        <th>"Qualifications"</th>
                        <th class="sortable" on:click=move |_| sort_by("display_order")>"#"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || visible.get()
                        key=|m| (m.id.clone(), m.role.clone())
                        children=move |member| {
                            let role_id = member.id.clone();
                            let delete_id = member.id.clone();
                            let current = member.role.clone();
                            view! {
                                <tr>
                                    <td>
                                        {member.name.clone()} <br />
                                        <small>{member.email.clone()}</small>
                                    </td>
                                    <td>
                                        <select on:change=move |ev| {
                                            change_role(role_id.clone(), event_target_value(&ev))
                                        }>
                                            {MEMBER_ROLES
                                                .iter()
                                                .map(|(value, label)| {
                                                    let selected = *value == current;
                                                    view! {
                                                        <option value={*value} selected=selected>
                                                            {*label}
                                                        </option>
                                                    }
                                                })
                                                .collect_view()}
                                        </select>
                                    </td>
                                    <td>{member.qualifications.join(", ")}</td>
                                    <td>{member.display_order}</td>
                                    <td>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(move |_| {
                                                delete_member(delete_id.clone())
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
                <div class="empty-state">"No members found"</div>
            </Show>

            <PaginationBar page=page total_pages=total_pages on_page=on_page />
        </div>
    }
}
