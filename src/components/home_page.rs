//! Home Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::page::Page;
use crate::store::{use_app_store, AppStateStoreFields};

/// Greeting with shortcuts to the other pages
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let username = move || {
        store
            .session()
            .with(|s| s.as_ref().map(|s| s.username.clone()).unwrap_or_default())
    };

    view! {
        <section class="card home-card">
            <h1>"Welcome, " {username} "!"</h1>
            <div class="button-row">
                <button class="primary-btn" on:click=move |_| ctx.navigate(Page::Roster)>
                    "User Data"
                </button>
                <button class="secondary-btn" on:click=move |_| ctx.navigate(Page::Settings)>
                    "Settings"
                </button>
            </div>
        </section>
    }
}
