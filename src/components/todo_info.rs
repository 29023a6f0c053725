//! Todo Info Component
//!
//! A single todo card: title plus owner.

use leptos::prelude::*;

use crate::render::TodoRow;
use crate::components::UserInfo;

#[component]
pub fn TodoInfo(row: TodoRow) -> impl IntoView {
    let class = row.class();
    let href = row.mailto();

    view! {
        <article class=class>
            <h2 class="TodoInfo__title">{row.title}</h2>
            <UserInfo name=row.user_name href=href />
        </article>
    }
}
