//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board's
//! items live in the renderer; the store only mirrors them for display.

use leptos::prelude::*;
use likes_binder::{Credentials, FoxImage, Item};
use reactive_stores::Store;

/// Progress of the fox fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FoxState {
    #[default]
    Idle,
    Loading,
    Loaded(FoxImage),
    Failed(String),
}

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot of the board, refreshed after every change
    pub candies: Vec<Item>,
    pub fox: FoxState,
    /// Login form contents
    pub user: Credentials,
    /// Formatted recent log lines, oldest first
    pub logs: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_candies(store: &AppStore, items: Vec<Item>) {
    store.candies().set(items);
}

pub fn store_candies(store: &AppStore) -> Vec<Item> {
    store.candies().get()
}

pub fn store_set_fox(store: &AppStore, fox: FoxState) {
    store.fox().set(fox);
}

pub fn store_fox(store: &AppStore) -> FoxState {
    store.fox().get()
}

/// Apply an edit to the login form contents
pub fn store_update_user(store: &AppStore, f: impl FnOnce(&mut Credentials)) {
    f(&mut store.user().write());
}

pub fn store_user(store: &AppStore) -> Credentials {
    store.user().get()
}

pub fn store_set_logs(store: &AppStore, lines: Vec<String>) {
    store.logs().set(lines);
}

pub fn store_logs(store: &AppStore) -> Vec<String> {
    store.logs().get()
}
