//! Reactive application state.

pub mod store;

use cybernet::nav::Page;
use cybernet::portal::Portal;
use cybernet::store::PortalState;
use leptos::prelude::*;

use crate::net::transport::GlooTransport;
use self::store::SignalStore;

/// The portal as wired in the browser; provided as context by `App`.
pub type AppPortal = Portal<GlooTransport, SignalStore>;

/// The app's portal in a `Copy` handle so event closures can each take one.
pub fn use_portal() -> StoredValue<AppPortal> {
    StoredValue::new(expect_context::<AppPortal>())
}

/// The tracked state signal components render from.
pub fn use_portal_state() -> RwSignal<PortalState> {
    expect_context::<AppPortal>().store().state()
}

/// Fire-and-forget navigation from an event handler.
pub fn spawn_show(portal: AppPortal, page: Page) {
    leptos::task::spawn_local(async move {
        portal.show(page).await;
    });
}
