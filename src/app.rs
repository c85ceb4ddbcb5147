//! Application Shell
//!
//! Top-level component: provides the app context and store, renders the
//! nav bar and switches between pages. Admin pages only appear when a
//! bearer token is present.

use leptos::prelude::*;

use crate::components::{
    AcademicPrograms, ContactInbox, CouncilMembers, EventVideosAdmin, EventVideosGallery,
    ImageGallery, NoticeStack, PastEvents, ResearchProjects, UpcomingEvents,
};
use crate::context::AppContext;
use crate::store::{AppState, AppStore};

const TOKEN_STORAGE_KEY: &str = "medsoc.auth_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    UpcomingEvents,
    PastEvents,
    Gallery,
    Videos,
    Academic,
    Research,
    AdminInbox,
    AdminCouncil,
    AdminVideos,
}

impl Page {
    const PUBLIC: [Page; 6] = [
        Page::UpcomingEvents,
        Page::PastEvents,
        Page::Gallery,
        Page::Videos,
        Page::Academic,
        Page::Research,
    ];

    const ADMIN: [Page; 3] = [Page::AdminInbox, Page::AdminCouncil, Page::AdminVideos];

    fn title(&self) -> &'static str {
        match self {
            Page::UpcomingEvents => "Upcoming Events",
            Page::PastEvents => "Past Events",
            Page::Gallery => "Gallery",
            Page::Videos => "Videos",
            Page::Academic => "Academic",
            Page::Research => "Research",
            Page::AdminInbox => "Inbox",
            Page::AdminCouncil => "Council",
            Page::AdminVideos => "Manage Videos",
        }
    }
}

/// Bearer token persisted by the (out-of-scope) login flow.
fn stored_token() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(TOKEN_STORAGE_KEY)
        .ok()?
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(stored_token());
    provide_context(ctx);
    provide_context::<AppStore>(reactive_stores::Store::new(AppState::default()));

    let (page, set_page) = signal(Page::UpcomingEvents);
    let is_admin = move || ctx.auth_token.get().is_some();

    let nav_tab = move |target: Page| {
        let is_active = move || page.get() == target;
        view! {
            <button
                class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                on:click=move |_| set_page.set(target)
            >
                {target.title()}
            </button>
        }
    };

    view! {
        <div class="app-layout">
            <NoticeStack />

            <nav class="nav-bar">
                <span class="site-title">"Medical Society"</span>
                {Page::PUBLIC.iter().map(|p| nav_tab(*p)).collect_view()}
                <Show when=is_admin>
                    <span class="nav-divider">"Admin"</span>
                    {Page::ADMIN.iter().map(|p| nav_tab(*p)).collect_view()}
                </Show>
            </nav>

            <main class="main-content">
                {move || match page.get() {
                    Page::UpcomingEvents => view! { <UpcomingEvents /> }.into_any(),
                    Page::PastEvents => view! { <PastEvents /> }.into_any(),
                    Page::Gallery => view! { <ImageGallery /> }.into_any(),
                    Page::Videos => view! { <EventVideosGallery /> }.into_any(),
                    Page::Academic => view! { <AcademicPrograms /> }.into_any(),
                    Page::Research => view! { <ResearchProjects /> }.into_any(),
                    Page::AdminInbox => view! { <ContactInbox /> }.into_any(),
                    Page::AdminCouncil => view! { <CouncilMembers /> }.into_any(),
                    Page::AdminVideos => view! { <EventVideosAdmin /> }.into_any(),
                }}
            </main>
        </div>
    }
}
