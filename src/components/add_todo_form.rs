//! Add Todo Form Component
//!
//! Title input and user dropdown with inline validation messages.

use leptos::prelude::*;

use crate::form::{FormError, FormState};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::components::UserSelect;

/// Form that appends a todo to the store on valid submit
#[component]
pub fn AddTodoForm() -> impl IntoView {
    let store = use_app_store();
    let form = RwSignal::new(FormState::new());

    let users = Signal::derive(move || store.users().get());
    let selected_user = Signal::derive(move || form.with(|f| f.user_id));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut state = form.get_untracked();

        // Only touch the todos store once the draft is known to be valid
        if let Err(errors) = state.validate() {
            form.set(state);
            web_sys::console::log_1(&format!("[FORM] Submit rejected: {:?}", errors).into());
            return;
        }

        let users = store.users().get_untracked();
        let result = state.submit(&users, &mut store.todos().write());
        form.set(state);

        if let Ok(id) = result {
            web_sys::console::log_1(&format!("[FORM] Added todo #{}", id).into());
        }
    };

    view! {
        <form on:submit=on_submit>
            <div class="field">
                <label>
                    "Title: "
                    <input
                        type="text"
                        data-cy="titleInput"
                        placeholder="Enter todo title"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            form.update(|f| f.on_title_change(&raw));
                        }
                    />
                </label>
                <Show when=move || form.with(|f| f.title_error)>
                    <span class="error">{FormError::MissingTitle.to_string()}</span>
                </Show>
            </div>

            <div class="field">
                <label>
                    "User: "
                    <UserSelect
                        users=users
                        selected=selected_user
                        on_change=move |id| form.update(|f| f.on_user_change(id))
                    />
                </label>
                <Show when=move || form.with(|f| f.user_error)>
                    <span class="error">{FormError::NoUserSelected.to_string()}</span>
                </Show>
            </div>

            <button type="submit" data-cy="submitButton">
                "Add"
            </button>
        </form>
    }
}
