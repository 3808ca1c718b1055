//! Page section wrapper; only the current page carries `active`.

#[cfg(test)]
#[path = "page_section_test.rs"]
mod page_section_test;

use cybernet::nav::Page;
use leptos::prelude::*;

use crate::state::use_portal_state;

fn section_class(active: bool) -> &'static str {
    if active { "page-content active" } else { "page-content" }
}

#[component]
pub fn PageSection(page: Page, children: Children) -> impl IntoView {
    let state = use_portal_state();
    view! {
        <section id=page.id() class=move || section_class(state.with(|s| s.page) == page)>
            {children()}
        </section>
    }
}
