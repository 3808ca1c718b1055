//! Shared auth-form pieces.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use cybernet::store::FormKind;
use leptos::prelude::*;

use crate::state::use_portal_state;

fn input_class(focused: bool) -> &'static str {
    if focused { "form-input pulse" } else { "form-input" }
}

fn button_class(pending: bool) -> &'static str {
    if pending { "cyber-btn loading" } else { "cyber-btn" }
}

/// Labeled input bound to a string signal; pulses while focused.
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let focused = RwSignal::new(false);

    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input
                class=move || input_class(focused.get())
                type=kind
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
            />
        </div>
    }
}

/// Submit button disabled while its form's request is in flight.
#[component]
pub fn SubmitButton(label: &'static str, form: FormKind) -> impl IntoView {
    let state = use_portal_state();
    let pending = move || state.with(|s| s.pending.is_pending(form));

    view! {
        <button type="submit" class=move || button_class(pending()) disabled=pending>
            {label}
        </button>
    }
}
