//! User Select Component
//!
//! Dropdown of known users with a leading "no selection" option.

use leptos::prelude::*;

use crate::form::{parse_user_id, NO_USER_SELECTED};
use crate::models::User;

/// User dropdown bound to a selected id (0 = none)
#[component]
pub fn UserSelect(
    users: Signal<Vec<User>>,
    selected: Signal<u32>,
    on_change: impl Fn(u32) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            data-cy="userSelect"
            prop:value=move || selected.get().to_string()
            on:change=move |ev| on_change(parse_user_id(&event_target_value(&ev)))
        >
            <option value=NO_USER_SELECTED.to_string()>"Choose a user"</option>
            {move || users.get().into_iter().map(|user| view! {
                <option value=user.id.to_string()>{user.name}</option>
            }).collect_view()}
        </select>
    }
}
