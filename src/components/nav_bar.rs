//! Navigation Bar Component
//!
//! App title plus page links, shown only while logged in.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::page::Page;
use crate::store::{use_app_store, AppStateStoreFields};

const LINKS: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Roster, "User Data"),
    (Page::Settings, "Settings"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let logged_in = Memo::new(move |_| store.session().with(Option::is_some));

    view! {
        <header class="nav-bar">
            <span class="nav-title">"User Management"</span>
            <Show when=move || logged_in.get()>
                <nav class="nav-links">
                    {LINKS.iter().map(|&(page, label)| {
                        let is_active = move || ctx.current_page() == page;
                        view! {
                            <button
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| ctx.navigate(page)
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
