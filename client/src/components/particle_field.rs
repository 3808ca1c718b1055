//! Decorative particle background.

use leptos::prelude::*;

use crate::state::use_portal_state;

#[component]
pub fn ParticleField() -> impl IntoView {
    let state = use_portal_state();
    view! {
        <div id="particles" class="particles">
            {move || {
                state.with(|s| {
                    s.particles
                        .iter()
                        .map(|p| view! { <div class="particle" style=p.style()></div> })
                        .collect_view()
                })
            }}
        </div>
    }
}
