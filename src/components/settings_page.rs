//! Settings Page
//!
//! Holds the logout action.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::page::Page;
use crate::store::{store_logout, use_app_store};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let logout = move |_| {
        log::info!("[SETTINGS] logging out");
        store_logout(&store);
        ctx.navigate(Page::Login);
    };

    view! {
        <section class="card settings-card">
            <h2>"Settings"</h2>
            <button class="primary-btn" on:click=logout>"Logout"</button>
        </section>
    }
}
