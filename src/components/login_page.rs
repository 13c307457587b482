//! Login Page
//!
//! Username/password form. Any well-formed pair opens a session.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::TextField;
use crate::context::use_app_context;
use crate::error::LoginField;
use crate::page::Page;
use crate::session::LoginForm;
use crate::store::{store_login, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.try_update(|f| f.submit()) {
            Some(Ok(session)) => {
                log::info!("[LOGIN] {} logged in", session.username);
                store_login(&store, session);
                ctx.navigate(Page::Home);
            }
            Some(Err(errors)) => log::debug!("[LOGIN] rejected: {:?}", errors),
            None => {}
        }
    };

    let input_for = move |field: LoginField, input_type: &'static str| {
        view! {
            <TextField
                label=field.label()
                input_type=input_type
                value=Signal::derive(move || form.with(|f| f.value(field).to_string()))
                on_input=move |value: String| form.update(|f| f.set(field, value))
                on_blur=move |_: ()| form.update(|f| f.touch(field))
                error=Signal::derive(move || {
                    form.with(|f| f.visible_error(field)).map(|e| e.to_string())
                })
            />
        }
    };

    view! {
        <section class="card login-card">
            <h1>"Login"</h1>
            <form class="login-form" on:submit=on_submit>
                {input_for(LoginField::Username, "text")}
                {input_for(LoginField::Password, "password")}
                <button type="submit" class="primary-btn">"Login"</button>
            </form>
        </section>
    }
}
