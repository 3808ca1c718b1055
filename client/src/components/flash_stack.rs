//! Stacked flash notifications; a click dismisses one early.

#[cfg(test)]
#[path = "flash_stack_test.rs"]
mod flash_stack_test;

use cybernet::flash::{Flash, Severity};
use leptos::prelude::*;

use crate::state::{use_portal, use_portal_state};

fn flash_class(severity: Severity) -> String {
    format!("flash-message {}", severity.css_class())
}

#[component]
pub fn FlashStack() -> impl IntoView {
    let portal = use_portal();
    let state = use_portal_state();

    view! {
        <div id="flashMessages" class="flash-messages">
            <For
                each=move || state.with(|s| s.flashes.items().to_vec())
                key=|flash| flash.id
                children=move |Flash { id, text, severity }| {
                    view! {
                        <div
                            class=flash_class(severity)
                            on:click=move |_| {
                                portal.with_value(|p| p.dismiss_flash(id));
                            }
                        >
                            {text}
                        </div>
                    }
                }
            />
        </div>
    }
}
