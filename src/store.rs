//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! admin working sets; public screens keep their collections in local
//! component signals. Mutations never patch these collections in place:
//! every successful mutation triggers a full re-fetch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ContactMessage, CouncilMember, EventVideo};

/// Admin working sets, refreshed wholesale from the API
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Contact-form inbox
    pub contacts: Vec<ContactMessage>,
    /// Council member profiles
    pub members: Vec<CouncilMember>,
    /// Event video catalogue
    pub videos: Vec<EventVideo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
