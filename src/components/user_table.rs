//! User Data Page
//!
//! Search box, user table and the Add/Edit dialog. Loads the roster on first
//! mount in a session.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TextField, UserDialog};
use crate::context::use_app_context;
use crate::roster::{LoadState, Roster};
use crate::store::{store_delete_user, use_app_store, AppStateStoreFields};

const COLUMNS: &[&str] = &["First Name", "Last Name", "Email", "Phone", "Company", "Actions"];

#[component]
pub fn UserDataPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Load users on mount (once per session, failures are only logged)
    Effect::new(move |_| {
        let Some(epoch) = store.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        let url = ctx.config().users_url;
        log::debug!("[USERS] fetching {}", url);
        spawn_local(async move {
            let result = api::fetch_users(&url).await;
            store.update(|s| s.finish_load(epoch, result));
        });
    });

    let filtered = Memo::new(move |_| {
        let query = store.search().get();
        store.roster().with(|roster| roster.filter(&query))
    });
    let load_state = Memo::new(move |_| store.load_state().get());

    let total = Memo::new(move |_| store.roster().with(Roster::len));

    let empty_text = move || match load_state.get() {
        LoadState::Idle | LoadState::Loading => "Loading users...",
        LoadState::Ready | LoadState::Failed if store.roster().with(Roster::is_empty) => "No users yet",
        LoadState::Ready | LoadState::Failed => "No users match the search",
    };

    view! {
        <section class="card user-data">
            <h2>"User Data"</h2>

            <div class="toolbar">
                <button class="primary-btn" on:click=move |_| store.form().update(|f| f.open_for_create())>
                    "Add User"
                </button>
                <TextField
                    label="Search by name or email"
                    value=Signal::derive(move || store.search().get())
                    on_input=move |value: String| store.search().set(value)
                />
            </div>

            <table class="user-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|&title| view! { <th>{title}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|user| user.clone()
                        children=move |user| {
                            let id = user.id;
                            let target = user.clone();
                            view! {
                                <tr>
                                    <td>{user.first_name}</td>
                                    <td>{user.last_name}</td>
                                    <td>{user.email}</td>
                                    <td>{user.phone}</td>
                                    <td>{user.company_name}</td>
                                    <td class="actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| store.form().update(|f| f.open_for_edit(&target))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| {
                                                store_delete_user(&store, id);
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                    <Show when=move || filtered.with(Vec::is_empty)>
                        <tr class="empty-row">
                            <td colspan="6">{empty_text}</td>
                        </tr>
                    </Show>
                </tbody>
            </table>
            <p class="user-count">
                {move || format!("{} of {} users", filtered.with(Vec::len), total.get())}
            </p>
        </section>

        <UserDialog />
    }
}
