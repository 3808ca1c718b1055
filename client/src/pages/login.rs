//! Login form.

use cybernet::nav::Page;
use cybernet::net::types::LoginForm;
use cybernet::store::FormKind;
use leptos::prelude::*;

use crate::components::form::{FormField, SubmitButton};
use crate::components::page_section::PageSection;
use crate::state::{spawn_show, use_portal};

#[component]
pub fn LoginPage() -> impl IntoView {
    let portal = use_portal();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };
        let portal = portal.get_value();
        leptos::task::spawn_local(async move {
            if portal.login(&form).await.is_ok() {
                username.set(String::new());
                password.set(String::new());
            }
        });
    };

    view! {
        <PageSection page=Page::Login>
            <div class="auth-container">
                <h2 class="auth-title">"System Access"</h2>
                <form id="loginForm" class="auth-form" on:submit=on_submit>
                    <FormField label="Username" value=username autocomplete="username"/>
                    <FormField label="Password" value=password kind="password" autocomplete="current-password"/>
                    <SubmitButton label="Login" form=FormKind::Login/>
                </form>
                <div class="auth-links">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        spawn_show(portal.get_value(), Page::Reset);
                    }>"Forgot password?"</a>
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        spawn_show(portal.get_value(), Page::Register);
                    }>"Create an account"</a>
                </div>
            </div>
        </PageSection>
    }
}
