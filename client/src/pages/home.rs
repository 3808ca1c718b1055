//! Landing hero with calls to action.

use cybernet::nav::Page;
use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::state::{spawn_show, use_portal, use_portal_state};

#[component]
pub fn HomePage() -> impl IntoView {
    let portal = use_portal();
    let state = use_portal_state();
    let logged_in = move || state.with(|s| s.session.is_logged_in);
    let go = move |page: Page| move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        spawn_show(portal.get_value(), page);
    };

    view! {
        <PageSection page=Page::Home>
            <div class="hero">
                <h1 class="hero-title glitch">"CyberNet"</h1>
                <p class="hero-subtitle">"Secure access to the neural network of tomorrow"</p>
                <div class="hero-actions">
                    <Show
                        when=logged_in
                        fallback=move || {
                            view! {
                                <button class="cyber-btn" on:click=go(Page::Login)>"Access System"</button>
                                <button class="cyber-btn secondary" on:click=go(Page::Register)>"Join Network"</button>
                            }
                        }
                    >
                        <button class="cyber-btn" on:click=go(Page::Dashboard)>"Enter Dashboard"</button>
                    </Show>
                </div>
            </div>
        </PageSection>
    }
}
