//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Todo, User};
use crate::seed;

/// Committed application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Known users, read-only after startup
    pub users: Vec<User>,
    /// All todos, append-only
    pub todos: Vec<Todo>,
}

impl AppState {
    /// State seeded from the embedded data; empty if the seed fails to decode
    pub fn from_seed() -> Self {
        match seed::load() {
            Ok((users, todos)) => {
                web_sys::console::log_1(&format!("[APP] Loaded {} users, {} todos", users.len(), todos.len()).into());
                Self { users, todos }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("[APP] Failed to load seed data: {}", e).into());
                Self::default()
            }
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
