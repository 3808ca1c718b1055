//! `Store` backed by a Leptos signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components subscribe to [`SignalStore::state`] and re-render when a
//! handler writes through the `Store` trait. Handler reads are untracked so
//! async command code never registers as a reactive dependency.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::time::Duration;

use cybernet::store::{PortalState, Store, Task};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SignalStore {
    state: RwSignal<PortalState>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self { state: RwSignal::new(PortalState::default()) }
    }

    /// The tracked signal components render from.
    pub fn state(&self) -> RwSignal<PortalState> {
        self.state
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&PortalState) -> R) -> R {
        self.state.with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut PortalState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn schedule(&self, after: Duration, task: Task) {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(after).await;
            task();
        });
        #[cfg(not(feature = "csr"))]
        {
            tracing::debug!(after_ms = after.as_millis(), "timer dropped outside the browser");
            drop(task);
        }
    }

    fn format_date(&self, iso: &str) -> String {
        #[cfg(feature = "csr")]
        {
            locale_date(iso)
        }
        #[cfg(not(feature = "csr"))]
        {
            cybernet::view::short_date(iso)
        }
    }
}

/// Browser-locale short date, `"Invalid Date"` when unparseable.
#[cfg(feature = "csr")]
fn locale_date(iso: &str) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return cybernet::view::INVALID_DATE.to_owned();
    }
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}
