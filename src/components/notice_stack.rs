//! Notice Stack Component
//!
//! Transient, non-blocking notifications. Fetch and mutation failures
//! land here; the list below keeps rendering its last-good data.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{AppContext, NoticeLevel};

const AUTO_DISMISS_MS: u32 = 6000;

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notices = ctx.notices();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    spawn_local(async move {
                        TimeoutFuture::new(AUTO_DISMISS_MS).await;
                        ctx.dismiss(id);
                    });
                    let class = match notice.level {
                        NoticeLevel::Info => "notice info",
                        NoticeLevel::Error => "notice error",
                    };
                    view! {
                        <div class=class>
                            <span class="notice-text">{notice.text.clone()}</span>
                            <button class="notice-dismiss" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
