//! User Roster App
//!
//! Root component: provides state and switches between pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HomePage, LoginPage, NavBar, NoticeBanner, SettingsPage, UserDataPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::page::Page;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    let page = Memo::new(move |_| ctx.current_page());

    view! {
        <div class="app-layout">
            <NavBar />
            <NoticeBanner />
            <main class="main-content">
                {move || match page.get() {
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Home => view! { <HomePage /> }.into_any(),
                    Page::Roster => view! { <UserDataPage /> }.into_any(),
                    Page::Settings => view! { <SettingsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
