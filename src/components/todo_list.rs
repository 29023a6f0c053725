//! Todo List Component
//!
//! Renders every todo in the store, in insertion order.

use leptos::prelude::*;

use crate::render::todo_rows;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::components::TodoInfo;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Todos are never edited in place, so the id alone is a stable key
    let rows = move || store.todos().with(|todos| todo_rows(todos));

    view! {
        <section class="TodoList">
            <For
                each=rows
                key=|row| row.id
                children=move |row| view! { <TodoInfo row=row /> }
            />
        </section>
    }
}
