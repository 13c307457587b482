//! User Dialog Component
//!
//! Modal Add/Edit form. Fields are not validated.

use leptos::prelude::*;

use crate::components::TextField;
use crate::form::FormField;
use crate::store::{store_submit_form, use_app_store, AppStateStoreFields};

#[component]
pub fn UserDialog() -> impl IntoView {
    let store = use_app_store();
    let is_open = Memo::new(move |_| store.form().with(|f| f.open));

    let save = move |_| {
        if store_submit_form(&store).is_none() {
            log::debug!("[DIALOG] nothing saved");
        }
    };
    let cancel = move |_| store.form().update(|f| f.close());

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=cancel>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h2 class="dialog-title">{move || store.form().with(|f| f.title())}</h2>
                    <div class="dialog-content">
                        {FormField::ALL.iter().map(|&field| view! {
                            <TextField
                                label=field.label()
                                value=Signal::derive(move || store.form().with(|f| f.value(field).to_string()))
                                on_input=move |value: String| store.form().update(|f| f.set(field, value))
                            />
                        }).collect_view()}
                    </div>
                    <div class="dialog-actions">
                        <button class="cancel-btn" on:click=cancel>"Cancel"</button>
                        <button class="primary-btn" on:click=save>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
