//! Password reset: request a link, or set a new password when the page was
//! opened from one.

use cybernet::nav::Page;
use cybernet::net::types::{ResetConfirmForm, ResetForm};
use cybernet::store::FormKind;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::form::{FormField, SubmitButton};
use crate::components::page_section::PageSection;
use crate::state::use_portal;

#[component]
fn RequestResetForm() -> impl IntoView {
    let portal = use_portal();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = ResetForm { email: email.get_untracked() };
        let portal = portal.get_value();
        leptos::task::spawn_local(async move {
            if portal.reset_password(&form).await.is_ok() {
                email.set(String::new());
            }
        });
    };

    view! {
        <h2 class="auth-title">"Reset Access"</h2>
        <form id="resetForm" class="auth-form" on:submit=on_submit>
            <FormField label="Email" value=email kind="email" autocomplete="email"/>
            <SubmitButton label="Send Reset Link" form=FormKind::Reset/>
        </form>
    }
}

#[component]
fn ConfirmResetForm(token: String, token_slot: RwSignal<Option<String>>) -> impl IntoView {
    let portal = use_portal();
    let token = StoredValue::new(token);
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form =
            ResetConfirmForm { password: password.get_untracked(), confirm_password: confirm_password.get_untracked() };
        let token = token.get_value();
        let portal = portal.get_value();
        leptos::task::spawn_local(async move {
            if portal.confirm_reset(&token, &form).await.is_ok() {
                // Tokens are single-use; go back to the request form.
                token_slot.set(None);
            }
        });
    };

    view! {
        <h2 class="auth-title">"Set New Password"</h2>
        <form id="resetConfirmForm" class="auth-form" on:submit=on_submit>
            <FormField label="New Password" value=password kind="password" autocomplete="new-password"/>
            <FormField
                label="Confirm Password"
                value=confirm_password
                kind="password"
                autocomplete="new-password"
            />
            <SubmitButton label="Update Password" form=FormKind::ResetConfirm/>
        </form>
    }
}

#[component]
pub fn ResetPage(token: Option<String>) -> impl IntoView {
    let token_slot = RwSignal::new(token);

    view! {
        <PageSection page=Page::Reset>
            <div class="auth-container">
                {move || match token_slot.get() {
                    Some(token) => view! { <ConfirmResetForm token token_slot/> }.into_any(),
                    None => view! { <RequestResetForm/> }.into_any(),
                }}
            </div>
        </PageSection>
    }
}
