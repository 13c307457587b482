//! Notice Banner Component
//!
//! Shows the latest roster notice and hides it after the configured timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();
    let timeout_ms = use_app_context().config().notice_timeout_ms;
    let current = Memo::new(move |_| store.notice().get());

    // Each new notice gets its own timer; a stale timer won't clear a newer notice
    Effect::new(move |_| {
        if let Some(notice) = current.get() {
            let seq = notice.seq;
            spawn_local(async move {
                TimeoutFuture::new(timeout_ms).await;
                store_dismiss_notice(&store, seq);
            });
        }
    });

    view! {
        {move || current.get().map(|notice| view! {
            <div class="notice success" role="status">{notice.message}</div>
        })}
    }
}
