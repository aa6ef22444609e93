//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Session state is
//! the single gate for navigation link sets and route guards.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Session;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Server-reported session, refreshed on every route change.
    pub session: Session,
}

pub type AppStore = Store<AppState>;

/// Get the app store from context.
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
