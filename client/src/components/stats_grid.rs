//! Dashboard statistics grid.
//!
//! Shows the last successfully loaded stats; a failed reload leaves them in
//! place.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::use_portal_state;

#[component]
pub fn StatsGrid() -> impl IntoView {
    let state = use_portal_state();
    let stats = move || state.with(|s| s.stats.clone());

    view! {
        <div id="dashboardStats" class="stats-grid">
            {move || match stats() {
                Some(stats) => stats
                    .tiles
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div class="stat-item">
                                <div class="stat-value">{tile.value}</div>
                                <div class="stat-label">{tile.label}</div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
                None => view! { <p class="stats-loading">"Loading statistics..."</p> }.into_any(),
            }}
        </div>
    }
}
