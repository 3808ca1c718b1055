//! Dashboard card whose entry animation replays on hover.

#[cfg(test)]
#[path = "dashboard_card_test.rs"]
mod dashboard_card_test;

use leptos::prelude::*;

/// Pause between clearing and re-adding the animation so the browser restarts it.
#[cfg(feature = "csr")]
const REPLAY_GAP: std::time::Duration = std::time::Duration::from_millis(10);

fn card_class(extra: &str, replaying: bool) -> String {
    let animation = if replaying { "no-animation" } else { "fade-in-up" };
    if extra.is_empty() {
        format!("dashboard-card {animation}")
    } else {
        format!("dashboard-card {extra} {animation}")
    }
}

#[component]
pub fn DashboardCard(
    #[prop(optional)] extra_class: &'static str,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let replaying = RwSignal::new(false);

    let on_mouseenter = move |_| {
        replaying.set(true);
        #[cfg(feature = "csr")]
        set_timeout(move || replaying.set(false), REPLAY_GAP);
        #[cfg(not(feature = "csr"))]
        replaying.set(false);
    };

    view! {
        <div
            class=move || card_class(extra_class, replaying.get())
            id=id
            on:mouseenter=on_mouseenter
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </div>
    }
}
