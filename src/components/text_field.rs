//! Text Field Component
//!
//! Labelled input with an optional inline error line.

use leptos::prelude::*;

/// Labelled text input
///
/// # Arguments
/// * `value` - Current value shown in the input
/// * `on_input` - Called with the new value on every keystroke
/// * `on_blur` - Called when the input loses focus
/// * `error` - Message rendered under the input when `Some`
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] on_blur: Option<Callback<()>>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.with(Option::is_some)).unwrap_or(false);

    view! {
        <div class=move || if has_error() { "text-field invalid" } else { "text-field" }>
            <label>
                <span class="text-field-label">{label}</span>
                <input
                    type=input_type
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(cb) = on_blur {
                            cb.run(());
                        }
                    }
                />
            </label>
            {move || error.and_then(|e| e.get()).map(|msg| view! {
                <p class="field-error">{msg}</p>
            })}
        </div>
    }
}
