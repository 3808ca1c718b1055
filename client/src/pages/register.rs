//! Registration form.

use cybernet::nav::Page;
use cybernet::net::types::RegisterForm;
use cybernet::store::FormKind;
use leptos::prelude::*;

use crate::components::form::{FormField, SubmitButton};
use crate::components::page_section::PageSection;
use crate::state::{spawn_show, use_portal};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let portal = use_portal();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let portal = portal.get_value();
        leptos::task::spawn_local(async move {
            if portal.register(&form).await.is_ok() {
                for field in [username, email, password, confirm_password] {
                    field.set(String::new());
                }
            }
        });
    };

    view! {
        <PageSection page=Page::Register>
            <div class="auth-container">
                <h2 class="auth-title">"Join the Network"</h2>
                <form id="registerForm" class="auth-form" on:submit=on_submit>
                    <FormField label="Username" value=username autocomplete="username"/>
                    <FormField label="Email" value=email kind="email" autocomplete="email"/>
                    <FormField label="Password" value=password kind="password" autocomplete="new-password"/>
                    <FormField
                        label="Confirm Password"
                        value=confirm_password
                        kind="password"
                        autocomplete="new-password"
                    />
                    <SubmitButton label="Register" form=FormKind::Register/>
                </form>
                <div class="auth-links">
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        spawn_show(portal.get_value(), Page::Login);
                    }>"Already registered? Log in"</a>
                </div>
            </div>
        </PageSection>
    }
}
