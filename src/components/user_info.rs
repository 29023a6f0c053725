//! User Info Component

use leptos::prelude::*;

/// Owner link shown under a todo title
#[component]
pub fn UserInfo(name: String, href: String) -> impl IntoView {
    view! {
        <a class="UserInfo" href=href>
            {name}
        </a>
    }
}
