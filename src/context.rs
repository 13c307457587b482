//! Application Context
//!
//! Navigation and configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::page::{self, Page};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page the user asked for; gated by `current_page`
    requested_page: RwSignal<Page>,
    config: StoredValue<AppConfig>,
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            requested_page: RwSignal::new(Page::default()),
            config: StoredValue::new(config),
            store,
        }
    }

    pub fn navigate(&self, page: Page) {
        self.requested_page.set(page);
    }

    /// Page to render given the current session
    pub fn current_page(&self) -> Page {
        let requested = self.requested_page.get();
        self.store.session().with(|session| page::resolve(requested, session.as_ref()))
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
