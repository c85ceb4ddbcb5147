//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger,
//! transient notices, and the admin bearer token.

use leptos::prelude::*;

use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch collections from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch collections from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Pending transient notices
    notices: RwSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
    /// Bearer token for admin-scoped calls; None on public visits
    pub auth_token: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(auth_token: Option<String>) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            reload_trigger,
            set_reload_trigger,
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
            auth_token: RwSignal::new(auth_token),
        }
    }

    /// Trigger a full re-fetch of the working collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn token(&self) -> Option<String> {
        self.auth_token.get_untracked()
    }

    pub fn notices(&self) -> RwSignal<Vec<Notice>> {
        self.notices
    }

    pub fn notify_info(&self, text: impl Into<String>) {
        self.push_notice(NoticeLevel::Info, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.push_notice(NoticeLevel::Error, text.into());
    }

    /// Log and surface a fetch/mutate failure; the last-good collection
    /// stays rendered.
    pub fn notify_api_error(&self, what: &str, error: &ApiError) {
        web_sys::console::error_1(&format!("[api] {what} failed: {error}").into());
        self.notify_error(format!("{what} failed: {error}"));
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|all| all.retain(|n| n.id != id));
    }

    fn push_notice(&self, level: NoticeLevel, text: String) {
        let id = self.next_notice_id.with_value(|v| *v) + 1;
        self.next_notice_id.set_value(id);
        self.notices.update(|all| all.push(Notice { id, level, text }));
    }
}
