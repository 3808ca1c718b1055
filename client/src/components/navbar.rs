//! Top navigation bar.
//!
//! Link visibility comes straight from `PortalState::nav`; the bar turns
//! opaque once the window scrolls past the threshold.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use cybernet::nav::Page;
use leptos::prelude::*;

use crate::state::{spawn_show, use_portal, use_portal_state};

fn navbar_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar scrolled" } else { "navbar" }
}

#[component]
fn NavLink(page: Page, label: &'static str) -> impl IntoView {
    let portal = use_portal();
    view! {
        <li>
            <a
                href="#"
                class="nav-link"
                id=format!("{}Link", page.id())
                on:click=move |ev| {
                    ev.prevent_default();
                    spawn_show(portal.get_value(), page);
                }
            >
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let portal = use_portal();
    let state = use_portal_state();
    let nav = move || state.with(|s| s.nav);

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let portal = portal.get_value();
        leptos::task::spawn_local(async move {
            // Failure is already flashed and the session cleared.
            let _ = portal.logout().await;
        });
    };

    view! {
        <nav class=move || navbar_class(state.with(|s| s.navbar_scrolled))>
            <div class="nav-container">
                <a
                    href="#"
                    class="nav-logo"
                    on:click=move |ev| {
                        ev.prevent_default();
                        spawn_show(portal.get_value(), Page::Home);
                    }
                >
                    "CyberNet"
                </a>
                <ul class="nav-menu">
                    <NavLink page=Page::Home label="Home"/>
                    <Show when=move || nav().login>
                        <NavLink page=Page::Login label="Login"/>
                    </Show>
                    <Show when=move || nav().register>
                        <NavLink page=Page::Register label="Register"/>
                    </Show>
                    <Show when=move || nav().dashboard>
                        <NavLink page=Page::Dashboard label="Dashboard"/>
                    </Show>
                    <Show when=move || nav().logout>
                        <li>
                            <a href="#" class="nav-link" id="logoutLink" on:click=on_logout>
                                "Logout"
                            </a>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
