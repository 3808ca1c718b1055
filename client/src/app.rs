//! Root application component and startup wiring.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use cybernet::nav::Page;
use cybernet::portal::Portal;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::components::{flash_stack::FlashStack, navbar::Navbar, particle_field::ParticleField};
use crate::net::transport::GlooTransport;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage, reset::ResetPage,
};
use crate::state::AppPortal;
use crate::state::store::SignalStore;
use crate::util::config::load_config;
use crate::util::location::{current_path, reset_token_from_path};

/// Page to land on once startup finishes.
fn landing_page(reset_token: Option<&str>) -> Page {
    if reset_token.is_some() { Page::Reset } else { Page::Home }
}

/// Root application component.
///
/// Builds the portal, provides it as context, wires window listeners and
/// runs the startup sequence.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let portal: AppPortal = Portal::new(GlooTransport, SignalStore::new(), load_config());
    provide_context(portal.clone());

    #[cfg(feature = "csr")]
    install_window_listeners(&portal);

    let reset_token = reset_token_from_path(&current_path());
    let landing = landing_page(reset_token.as_deref());
    leptos::task::spawn_local(async move {
        let mut rng = SmallRng::seed_from_u64(entropy_seed());
        portal.start(&mut rng).await;
        if landing != Page::Home {
            portal.show(landing).await;
        }
    });

    view! {
        <Title text="CyberNet"/>
        <ParticleField/>
        <Navbar/>
        <FlashStack/>
        <main class="main-content">
            <HomePage/>
            <LoginPage/>
            <RegisterPage/>
            <ResetPage token=reset_token/>
            <DashboardPage/>
        </main>
    }
}

/// Keyboard shortcuts and navbar scroll styling.
#[cfg(feature = "csr")]
fn install_window_listeners(portal: &AppPortal) {
    use cybernet::nav::KeyPress;

    let keys = portal.clone();
    // The app lives as long as the page; the handles are never removed.
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        let press = KeyPress::new(&ev.key(), ev.ctrl_key() || ev.meta_key());
        let action = keys.shortcut(&press);
        if action.prevent_default {
            ev.prevent_default();
        }
        if let Some(page) = action.page {
            crate::state::spawn_show(keys.clone(), page);
        }
    });

    let scroll = portal.clone();
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
            scroll.set_scroll(y);
        }
    });
}

#[cfg(feature = "csr")]
fn entropy_seed() -> u64 {
    js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits()
}

#[cfg(not(feature = "csr"))]
fn entropy_seed() -> u64 {
    0
}
