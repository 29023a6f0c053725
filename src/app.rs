//! Add-Todo App
//!
//! Root component: seeds the store, then lays out the form above the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::store::AppState;
use crate::components::{AddTodoForm, TodoList};

#[component]
pub fn App() -> impl IntoView {
    provide_context(Store::new(AppState::from_seed()));

    view! {
        <div class="App">
            <h1>"Add todo form"</h1>

            <AddTodoForm />

            <TodoList />
        </div>
    }
}
